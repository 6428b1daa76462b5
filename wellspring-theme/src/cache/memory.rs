//! In-memory cache.

use std::collections::HashMap;

use crate::Result;

use super::PreferenceCache;

/// Ephemeral cache, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: HashMap<String, String>,
}

impl MemoryCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceCache for MemoryCache {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
