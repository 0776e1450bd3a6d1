//! Bookmark persistence
//!
//! [`BookmarkStore`] is the only writer of the persisted list. Every mutation
//! is a full read-modify-write of the blob stored under one key; there is no
//! partial or merge persistence.

use tracing::{debug, error, info, warn};

use super::kv::KeyValueStore;
use super::models::{Bookmark, BookmarkList};
use crate::errors::{BookmarkError, Result};

/// Key the list is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "bookmarks";

pub struct BookmarkStore<S: KeyValueStore> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    pub fn new(kv: S, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn with_default_key(kv: S) -> Self {
        Self::new(kv, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.kv
    }

    pub fn backend_name(&self) -> &'static str {
        self.kv.backend_name()
    }

    /// Read and decode the stored list.
    ///
    /// Unlike [`load_all`](Self::load_all) this reports why the list could
    /// not be read. An absent key is not an error.
    pub fn try_load(&self) -> Result<BookmarkList> {
        let Some(blob) = self.kv.get(&self.key)? else {
            debug!("Storage key '{}' is absent, starting empty", self.key);
            return Ok(Vec::new());
        };

        serde_json::from_str::<BookmarkList>(&blob).map_err(|e| {
            BookmarkError::storage_parse(format!(
                "Failed to parse bookmarks under '{}': {}",
                self.key, e
            ))
        })
    }

    /// Load every bookmark, falling back to an empty list when the blob is
    /// missing, unreadable or malformed.
    pub fn load_all(&self) -> BookmarkList {
        match self.try_load() {
            Ok(list) => list,
            Err(e) => {
                warn!("{}; treating storage as empty", e);
                Vec::new()
            }
        }
    }

    /// Replace the stored list with `list`.
    pub fn save_all(&mut self, list: &[Bookmark]) -> Result<()> {
        let blob = serde_json::to_string(list)?;
        self.kv.set(&self.key, &blob)?;
        debug!("Saved {} bookmark(s) under '{}'", list.len(), self.key);
        Ok(())
    }

    pub fn append(&mut self, bookmark: Bookmark) -> Result<()> {
        let mut list = self.load_all();
        info!("Adding bookmark: {} -> {}", bookmark.site_name, bookmark.site_url);
        list.push(bookmark);
        self.save_all(&list)
    }

    /// Overwrite the bookmark at `index`.
    ///
    /// Callers must pass an index observed from the latest read; anything
    /// else is a contract violation and is reported as
    /// [`BookmarkError::IndexOutOfRange`] without touching storage.
    pub fn replace_at(&mut self, index: usize, bookmark: Bookmark) -> Result<()> {
        let mut list = self.load_all();
        let len = list.len();
        let Some(slot) = list.get_mut(index) else {
            error!("replace_at({}) on a list of {} bookmark(s)", index, len);
            return Err(BookmarkError::index_out_of_range(index, len));
        };
        info!(
            "Updating bookmark #{}: {} -> {}",
            index, bookmark.site_name, bookmark.site_url
        );
        *slot = bookmark;
        self.save_all(&list)
    }

    /// Remove the bookmark at `index`, shifting later entries down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Bookmark> {
        let mut list = self.load_all();
        if index >= list.len() {
            error!("remove_at({}) on a list of {} bookmark(s)", index, list.len());
            return Err(BookmarkError::index_out_of_range(index, list.len()));
        }
        let removed = list.remove(index);
        self.save_all(&list)?;
        info!("Removed bookmark #{}: {}", index, removed.site_name);
        Ok(removed)
    }

    /// Append a batch in a single read-modify-write. Returns how many
    /// bookmarks were added.
    pub fn extend(&mut self, batch: Vec<Bookmark>) -> Result<usize> {
        if batch.is_empty() {
            return Ok(0);
        }
        let mut list = self.load_all();
        let added = batch.len();
        list.extend(batch);
        self.save_all(&list)?;
        info!("Appended {} bookmark(s)", added);
        Ok(added)
    }

    pub fn get(&self, index: usize) -> Option<Bookmark> {
        self.load_all().into_iter().nth(index)
    }

    pub fn len(&self) -> usize {
        self.load_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryKeyValueStore;

    fn store_with(list: &[Bookmark]) -> BookmarkStore<MemoryKeyValueStore> {
        let mut store = BookmarkStore::with_default_key(MemoryKeyValueStore::new());
        store.save_all(list).unwrap();
        store
    }

    #[test]
    fn test_try_load_reports_parse_errors() {
        let kv = MemoryKeyValueStore::new().with_entry(DEFAULT_STORAGE_KEY, "{not json");
        let store = BookmarkStore::with_default_key(kv);

        assert!(matches!(
            store.try_load(),
            Err(BookmarkError::StorageParse(_))
        ));
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_each_mutation_writes_once() {
        let mut store = store_with(&[Bookmark::new("a", "https://a.io")]);
        let before = store.backend().writes();

        store.append(Bookmark::new("b", "https://b.io")).unwrap();
        store.replace_at(0, Bookmark::new("c", "https://c.io")).unwrap();
        store.remove_at(1).unwrap();

        assert_eq!(store.backend().writes(), before + 3);
    }

    #[test]
    fn test_out_of_range_does_not_write() {
        let mut store = store_with(&[Bookmark::new("a", "https://a.io")]);
        let before = store.backend().writes();

        assert!(matches!(
            store.replace_at(1, Bookmark::new("x", "https://x.io")),
            Err(BookmarkError::IndexOutOfRange(_))
        ));
        assert!(matches!(
            store.remove_at(5),
            Err(BookmarkError::IndexOutOfRange(_))
        ));
        assert_eq!(store.backend().writes(), before);
    }

    #[test]
    fn test_extend_empty_batch_is_noop() {
        let mut store = store_with(&[]);
        let before = store.backend().writes();
        assert_eq!(store.extend(Vec::new()).unwrap(), 0);
        assert_eq!(store.backend().writes(), before);
    }
}
