//! In-memory style registry.
//!
//! Stands in for the page's style-element registry on hosts without a real
//! page surface, and backs the pipeline's tests. Entries live for the
//! registry's lifetime, matching the page registry's "exists for the page's
//! lifetime" model.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::services::StyleRegistry;

/// Mutex-guarded map from scope identifier to injected style text.
#[derive(Debug, Default)]
pub struct MemoryStyleRegistry {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Injected text for an identifier, if any.
    pub fn text_for(&self, id: &str) -> Option<String> {
        self.entries.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl StyleRegistry for MemoryStyleRegistry {
    fn contains(&self, id: &str) -> bool {
        self.entries.lock().unwrap().contains_key(id)
    }

    fn insert(&self, id: &str, text: &str) {
        // First writer wins; the dedup contract forbids a second element
        // for the same identifier.
        self.entries
            .lock()
            .unwrap()
            .entry(id.to_string())
            .or_insert_with(|| text.to_string());
    }
}
