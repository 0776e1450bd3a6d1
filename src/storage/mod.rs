pub mod bookmark_store;
pub mod kv;
pub mod models;

pub use bookmark_store::{BookmarkStore, DEFAULT_STORAGE_KEY};
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use models::{Bookmark, BookmarkList};

use crate::config::StorageConfig;

pub struct StorageFactory;

impl StorageFactory {
    /// Build the file-backed store described by the storage config.
    pub fn create(config: &StorageConfig) -> BookmarkStore<FileKeyValueStore> {
        let kv = FileKeyValueStore::new(&config.data_dir);
        BookmarkStore::new(kv, config.key.clone())
    }
}
