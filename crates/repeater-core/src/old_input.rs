//! Old-input port.
//!
//! After a failed submission the host keeps the previously submitted form
//! data in request-scoped state. The normalization hook consults it when a
//! descriptor reaches the renderer without a value of its own.

use serde_json::Value;

/// Read-only lookup of previously submitted input by field name.
pub trait OldInputSource: Send + Sync {
    /// The submitted value for `field`, or `None` when nothing was
    /// submitted under that name.
    fn old(&self, field: &str) -> Option<Value>;
}
