//! Layout resolution port.
//!
//! Layouts are named, reusable definitions of a group of sub-fields,
//! registered by the host application and referenced by fully-qualified
//! name. A repeater only accepts layouts with the rows capability.

use std::sync::Arc;

use repeater_types::error::ResolutionError;

/// A named layout registered with the host application.
///
/// The base trait carries no behavior of its own; it exists so a registry
/// can hold layouts of any kind while the repeater checks for the one
/// capability it cares about.
pub trait Layout: Send + Sync {
    /// The rows capability, when this layout is a repeatable group of
    /// sub-fields. The default is "not a rows layout".
    fn as_rows(&self) -> Option<&dyn RowsLayout> {
        None
    }
}

/// A group of sub-fields renderable as one repeated row.
pub trait RowsLayout: Layout {
    /// Sub-field names of one repeated group, in render order.
    fn row_fields(&self) -> Vec<String>;
}

/// Read-only lookup of layouts through the application's service context.
pub trait LayoutRegistry: Send + Sync {
    /// Resolve a layout by name. `Ok(None)` means nothing is registered
    /// under that name; `Err` means the registry backend itself failed.
    fn resolve(&self, name: &str) -> Result<Option<Arc<dyn Layout>>, ResolutionError>;
}
