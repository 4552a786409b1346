//! Request-scoped old-input stores.

use std::collections::HashMap;

use repeater_core::old_input::OldInputSource;
use serde_json::Value;

/// Previously submitted form values for one request, keyed by field name.
///
/// The host fills this from its session flash data after a failed
/// submission and swaps in a fresh (empty) store per request.
#[derive(Debug, Default)]
pub struct SessionOldInput {
    values: HashMap<String, Value>,
}

impl SessionOldInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the submitted value for a field.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> &mut Self {
        self.values.insert(field.into(), value);
        self
    }
}

impl OldInputSource for SessionOldInput {
    fn old(&self, field: &str) -> Option<Value> {
        self.values.get(field).cloned()
    }
}

/// Null object for hosts without request sessions.
#[derive(Debug, Default)]
pub struct NoOldInput;

impl OldInputSource for NoOldInput {
    fn old(&self, _field: &str) -> Option<Value> {
        None
    }
}
