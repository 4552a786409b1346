//! In-memory layout registry.
//!
//! Hosts register their layout catalog once at startup; lookups are plain
//! map reads and never fail, so `resolve` only returns `Err` for registries
//! with a fallible backend (not this one).

use std::collections::HashMap;
use std::sync::Arc;

use repeater_core::layout::{Layout, LayoutRegistry};
use repeater_types::error::ResolutionError;

/// A fixed name -> layout map built by the host application.
#[derive(Default)]
pub struct StaticLayoutRegistry {
    layouts: HashMap<String, Arc<dyn Layout>>,
}

impl StaticLayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a layout under its fully-qualified name. A later
    /// registration under the same name replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, layout: Arc<dyn Layout>) -> &mut Self {
        self.layouts.insert(name.into(), layout);
        self
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl LayoutRegistry for StaticLayoutRegistry {
    fn resolve(&self, name: &str) -> Result<Option<Arc<dyn Layout>>, ResolutionError> {
        Ok(self.layouts.get(name).cloned())
    }
}
