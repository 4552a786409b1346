//! The repeater field descriptor builder.
//!
//! A `Repeater` describes a form control that lets the user add, remove,
//! and reorder repeated groups of sub-fields, where the group layout is
//! registered elsewhere and referenced by name. Configuration is fluent and
//! mutates the descriptor in place; some effects (value normalization) are
//! registered as hooks and applied by the host renderer in the finalize
//! phase, so later configuration calls still take effect before the
//! renderer reads the value.
//!
//! Typical usage:
//!
//! ```ignore
//! let mut field = Repeater::make("addresses");
//! field.required(true).min(1).button_label("Add address");
//! field.layout("AddressRows", &services)?;
//! field.ajax_data(json!({"post_type": "page"}))?;
//! // later, in the renderer:
//! field.finalize(&services);
//! ```

use std::fmt;

use repeater_types::attributes::{DEFAULT_VIEW, RepeaterAttributes};
use repeater_types::error::FieldError;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::services::FieldServices;
use crate::value::{is_iterable, wrap};

/// A finalization hook, run by the host renderer exactly once, in
/// registration order, before the descriptor is read for output.
type FinalizeHook = Box<dyn FnOnce(&mut RepeaterAttributes, &FieldServices) + Send>;

/// Fluent builder for a repeater field descriptor.
pub struct Repeater {
    attrs: RepeaterAttributes,
    view: String,
    hooks: Vec<FinalizeHook>,
}

impl Repeater {
    /// Create a named repeater descriptor.
    ///
    /// Seeds the value to an empty sequence and generates the per-instance
    /// template id, `"repeater_"` followed by 32 hex characters. The id is
    /// never recomputed.
    pub fn make(name: impl Into<String>) -> Self {
        Self::with_name(Some(name.into()))
    }

    /// Create a descriptor with no name yet; the field stays invalid until
    /// [`Repeater::name`] is called.
    pub fn make_unnamed() -> Self {
        Self::with_name(None)
    }

    fn with_name(name: Option<String>) -> Self {
        let template = format!("repeater_{}", Uuid::new_v4().simple());
        Self {
            attrs: RepeaterAttributes::new(name, template),
            view: DEFAULT_VIEW.to_string(),
            hooks: Vec::new(),
        }
    }

    /// Rename the form input. `original_name` keeps the name given at
    /// construction, so old-input lookup still finds data submitted under
    /// the old name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.attrs.name = Some(name.into());
        self
    }

    /// Replace the renderer template used to present the field.
    pub fn view(&mut self, view: impl Into<String>) -> &mut Self {
        self.view = view.into();
        self
    }

    /// Set the current row values.
    pub fn value(&mut self, value: Value) -> &mut Self {
        self.attrs.value = value;
        self
    }

    pub fn required(&mut self, required: bool) -> &mut Self {
        self.attrs.required = Some(required);
        self
    }

    pub fn min(&mut self, min: u32) -> &mut Self {
        self.attrs.min = Some(min);
        self
    }

    pub fn max(&mut self, max: u32) -> &mut Self {
        self.attrs.max = Some(max);
        self
    }

    pub fn help(&mut self, help: impl Into<String>) -> &mut Self {
        self.attrs.help = Some(help.into());
        self
    }

    pub fn button_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.attrs.button_label = Some(label.into());
        self
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.attrs.title = Some(title.into());
        self
    }

    /// Set an attribute outside the named set.
    pub fn attr(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.attrs.extra.insert(key.into(), value);
        self
    }

    /// Bind the repeatable row layout by name.
    ///
    /// The name must resolve through the registry to a layout with the rows
    /// capability; anything else fails with
    /// [`FieldError::UnsupportedLayout`] and leaves the descriptor
    /// untouched. On success only the encoded token is stored, and the
    /// value-normalization hook is registered for the finalize phase.
    pub fn layout(
        &mut self,
        layout: &str,
        services: &FieldServices,
    ) -> Result<&mut Self, FieldError> {
        let resolved = services.layouts.resolve(layout)?;
        let is_rows = resolved.as_deref().is_some_and(|l| l.as_rows().is_some());
        if !is_rows {
            return Err(FieldError::UnsupportedLayout(layout.to_string()));
        }

        // Validation and encoding both precede any mutation.
        let token = services.codec.encode(layout)?;
        self.attrs.layout = Some(token);
        self.hooks.push(Box::new(normalize_value));

        debug!(field = ?self.attrs.name, "bound repeater row layout");
        Ok(self)
    }

    /// Set the extra data shipped with every ajax request the client
    /// issues for this repeater.
    ///
    /// Arrays and objects are serialized to JSON text and overwrite the
    /// prior payload. Anything else keeps the prior payload untouched; a
    /// computation yielding a bare scalar is dropped without an error.
    pub fn ajax_data(&mut self, value: Value) -> Result<&mut Self, FieldError> {
        if is_iterable(&value) {
            self.attrs.ajax_data = serde_json::to_string(&value)?;
        } else {
            warn!(
                field = ?self.attrs.name,
                "ajax data is not a structured value; previous payload kept"
            );
        }
        Ok(self)
    }

    /// Like [`Repeater::ajax_data`], with the payload produced by a
    /// computation invoked here and now. Each call re-evaluates; nothing is
    /// cached.
    pub fn ajax_data_with<F>(&mut self, compute: F) -> Result<&mut Self, FieldError>
    where
        F: FnOnce() -> Value,
    {
        let value = compute();
        self.ajax_data(value)
    }

    /// Finalize phase, owned by the host renderer.
    ///
    /// Runs every registered hook exactly once, in registration order,
    /// strictly after all configuration calls and strictly before the
    /// descriptor's value is read for output. The hook list is drained, so
    /// a second call is a no-op.
    pub fn finalize(&mut self, services: &FieldServices) {
        for hook in self.hooks.drain(..) {
            hook(&mut self.attrs, services);
        }
    }

    /// Read-only view of the descriptor for the renderer.
    pub fn attributes(&self) -> &RepeaterAttributes {
        &self.attrs
    }

    /// The renderer template currently selected for this field.
    pub fn view_name(&self) -> &str {
        &self.view
    }

    /// Number of hooks still waiting for the finalize phase.
    pub fn pending_hooks(&self) -> usize {
        self.hooks.len()
    }

    /// Required attributes still unset; see
    /// [`RepeaterAttributes::missing_attributes`].
    pub fn missing_attributes(&self) -> Vec<&'static str> {
        self.attrs.missing_attributes()
    }

    pub fn is_complete(&self) -> bool {
        self.attrs.is_complete()
    }
}

impl fmt::Debug for Repeater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repeater")
            .field("attributes", &self.attrs)
            .field("view", &self.view)
            .field("pending_hooks", &self.hooks.len())
            .finish()
    }
}

/// The deferred normalization step registered at layout-bind time.
///
/// Reads the current value; when it is still unset (null or the empty
/// sequence the factory seeds), falls back to old input under the old
/// name. The result is then array-wrapped so the renderer never sees a
/// scalar or null value.
fn normalize_value(attrs: &mut RepeaterAttributes, services: &FieldServices) {
    let current = std::mem::take(&mut attrs.value);
    let unset = match &current {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    };

    let value = if unset {
        attrs
            .old_name()
            .and_then(|name| services.old_input.old(name))
            .unwrap_or(Value::Null)
    } else {
        current
    };

    attrs.value = wrap(value);
}
