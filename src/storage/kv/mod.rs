//! Key-value backends
//!
//! The bookmark list lives as one serialized blob under one key, the same
//! way a browser's local storage would hold it. Backends only move strings
//! around; they know nothing about bookmarks.

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

use crate::errors::Result;

pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing whatever was there.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}
