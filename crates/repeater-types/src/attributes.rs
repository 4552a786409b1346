//! Descriptor attribute record for a repeater field.
//!
//! The descriptor is a typed struct rather than a generic attribute bag:
//! every attribute the renderer knows about is a named optional field, and
//! anything beyond that goes into the open `extra` map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attributes that must be present before the renderer will touch the field.
pub const REQUIRED_ATTRIBUTES: [&str; 2] = ["name", "layout"];

/// Attributes the renderer may emit as literal HTML attributes on the
/// repeater tag. Everything else is internal or template-only.
pub const INLINE_ATTRIBUTES: [&str; 5] = ["required", "min", "max", "name", "ajax_data"];

/// Renderer template used when the host does not override it.
pub const DEFAULT_VIEW: &str = "fields/repeater";

/// CSS class applied to the repeater control by default.
pub const DEFAULT_CLASS: &str = "form-control";

/// The attribute record of a single repeater field descriptor.
///
/// Built by `repeater-core` and handed, read-only, to the renderer. Two
/// fields have non-obvious contracts:
///
/// - `layout` only ever holds the opaque encoded token produced by the
///   reference codec. The plaintext layout name is never stored.
/// - `template` is generated exactly once at construction and is never
///   recomputed; it correlates client-side repeated blocks to this
///   descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepeaterAttributes {
    /// Form-input identifier. May be changed after construction.
    pub name: Option<String>,
    /// The name as originally requested, preserved across renames.
    pub original_name: Option<String>,
    /// Opaque encoded layout reference.
    pub layout: Option<String>,
    /// Per-instance correlation id, `"repeater_"` + 32 hex characters.
    pub template: String,
    /// Current set of repeated row values. Always iterable after finalize.
    pub value: Value,
    /// JSON text shipped with every ajax request the client issues.
    pub ajax_data: String,
    /// CSS class for the control.
    pub class: String,
    pub required: Option<bool>,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub help: Option<String>,
    pub button_label: Option<String>,
    pub title: Option<String>,
    /// Open extension map for attributes the renderer does not know about.
    pub extra: BTreeMap<String, Value>,
}

impl RepeaterAttributes {
    /// Fresh attribute record with an empty value sequence and the default
    /// ajax payload (`"[]"`).
    pub fn new(name: Option<String>, template: String) -> Self {
        Self {
            original_name: name.clone(),
            name,
            layout: None,
            template,
            value: Value::Array(Vec::new()),
            ajax_data: "[]".to_string(),
            class: DEFAULT_CLASS.to_string(),
            required: None,
            min: None,
            max: None,
            help: None,
            button_label: None,
            title: None,
            extra: BTreeMap::new(),
        }
    }

    /// The name under which previously submitted input is looked up:
    /// `original_name` when it differs from the current name, else `name`.
    pub fn old_name(&self) -> Option<&str> {
        match (self.original_name.as_deref(), self.name.as_deref()) {
            (Some(original), Some(name)) if original != name => Some(original),
            (original, name) => name.or(original),
        }
    }

    /// Required attributes that are still unset. The renderer refuses to
    /// render a descriptor for which this is non-empty.
    pub fn missing_attributes(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.layout.is_none() {
            missing.push("layout");
        }
        missing
    }

    /// Whether all required attributes are present.
    pub fn is_complete(&self) -> bool {
        self.missing_attributes().is_empty()
    }

    /// The inline attributes currently present, as literal (name, value)
    /// pairs in [`INLINE_ATTRIBUTES`] order. `required` renders as the
    /// bare HTML boolean attribute.
    pub fn inline_attributes(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.required.unwrap_or(false) {
            pairs.push(("required", "required".to_string()));
        }
        if let Some(min) = self.min {
            pairs.push(("min", min.to_string()));
        }
        if let Some(max) = self.max {
            pairs.push(("max", max.to_string()));
        }
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        pairs.push(("ajax_data", self.ajax_data.clone()));
        pairs
    }
}
