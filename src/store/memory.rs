//! In-memory store, for tests and throwaway sessions.

use super::StateStore;
use std::collections::BTreeMap;

/// A [`StateStore`] that lives and dies with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, serde_json::Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keys are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: serde_json::Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
