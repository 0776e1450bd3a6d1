use std::collections::HashMap;

use super::KeyValueStore;
use crate::errors::Result;

/// In-process backend, nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without counting it as a write.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Number of `set`/`remove` calls served so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        self.writes += 1;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let kv = MemoryKeyValueStore::new();
        assert_eq!(kv.get("bookmarks").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_and_counts_writes() {
        let mut kv = MemoryKeyValueStore::new().with_entry("k", "old");
        assert_eq!(kv.writes(), 0);

        kv.set("k", "new").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("new"));
        assert_eq!(kv.writes(), 1);

        kv.remove("k").unwrap();
        assert_eq!(kv.get("k").unwrap(), None);
        assert_eq!(kv.writes(), 2);
    }
}
