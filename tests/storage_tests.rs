use bookmarker::errors::BookmarkError;
use bookmarker::storage::{
    Bookmark, BookmarkStore, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore,
};
use tempfile::TempDir;

fn sample() -> Vec<Bookmark> {
    vec![
        Bookmark::new("GitHub", "https://github.com"),
        Bookmark::new("Rust", "https://www.rust-lang.org"),
        Bookmark::new("Example", "http://example.com/path?q=1"),
    ]
}

#[cfg(test)]
mod memory_store_tests {
    use super::*;

    fn store() -> BookmarkStore<MemoryKeyValueStore> {
        BookmarkStore::with_default_key(MemoryKeyValueStore::new())
    }

    #[test]
    fn test_absent_key_loads_empty() {
        assert!(store().load_all().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut store = store();
        store.save_all(&sample()).unwrap();
        assert_eq!(store.load_all(), sample());
    }

    #[test]
    fn test_save_is_idempotent() {
        let mut store = store();
        store.save_all(&sample()).unwrap();
        let first = store.backend().get("bookmarks").unwrap();
        store.save_all(&sample()).unwrap();
        assert_eq!(store.backend().get("bookmarks").unwrap(), first);
    }

    #[test]
    fn test_append_goes_to_the_end() {
        let mut store = store();
        store.save_all(&sample()).unwrap();
        let extra = Bookmark::new("Docs", "https://docs.rs");

        store.append(extra.clone()).unwrap();

        let list = store.load_all();
        assert_eq!(list.len(), 4);
        assert_eq!(list[3], extra);
        assert_eq!(&list[..3], sample().as_slice());
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let mut store = store();
        store.save_all(&sample()).unwrap();

        let removed = store.remove_at(1).unwrap();

        assert_eq!(removed.site_name, "Rust");
        let list = store.load_all();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].site_name, "GitHub");
        assert_eq!(list[1].site_name, "Example");
    }

    #[test]
    fn test_replace_keeps_length_and_neighbours() {
        let mut store = store();
        store.save_all(&sample()).unwrap();
        let replacement = Bookmark::new("Crates", "https://crates.io");

        store.replace_at(1, replacement.clone()).unwrap();

        let list = store.load_all();
        assert_eq!(list.len(), 3);
        assert_eq!(list[1], replacement);
        assert_eq!(list[0], sample()[0]);
        assert_eq!(list[2], sample()[2]);
    }

    #[test]
    fn test_out_of_range_mutations_fail() {
        let mut store = store();
        store.save_all(&sample()).unwrap();

        assert!(matches!(
            store.remove_at(3),
            Err(BookmarkError::IndexOutOfRange(_))
        ));
        assert!(matches!(
            store.replace_at(7, Bookmark::new("x", "https://x.io")),
            Err(BookmarkError::IndexOutOfRange(_))
        ));
        assert_eq!(store.load_all(), sample());
    }

    #[test]
    fn test_malformed_blob_reads_as_empty() {
        let kv = MemoryKeyValueStore::new().with_entry("bookmarks", "{not json");
        let store = BookmarkStore::with_default_key(kv);

        assert!(store.load_all().is_empty());
        assert!(matches!(
            store.try_load(),
            Err(BookmarkError::StorageParse(_))
        ));
    }

    #[test]
    fn test_malformed_blob_is_overwritten_by_next_append() {
        let kv = MemoryKeyValueStore::new().with_entry("bookmarks", "42");
        let mut store = BookmarkStore::with_default_key(kv);

        store
            .append(Bookmark::new("GitHub", "https://github.com"))
            .unwrap();

        assert_eq!(store.load_all().len(), 1);
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let mut store = store();
        store
            .save_all(&[Bookmark::new("GitHub", "https://github.com")])
            .unwrap();

        let raw = store.backend().get("bookmarks").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["siteName"], "GitHub");
        assert_eq!(value[0]["siteUrl"], "https://github.com");
    }
}

#[cfg(test)]
mod file_store_tests {
    use super::*;

    #[test]
    fn test_file_round_trip_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();

        {
            let mut store = BookmarkStore::with_default_key(FileKeyValueStore::new(temp_dir.path()));
            store.save_all(&sample()).unwrap();
        }

        let store = BookmarkStore::with_default_key(FileKeyValueStore::new(temp_dir.path()));
        assert_eq!(store.load_all(), sample());
        assert!(temp_dir.path().join("bookmarks.json").exists());
    }

    #[test]
    fn test_missing_directory_is_created_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let mut store = BookmarkStore::new(FileKeyValueStore::new(&nested), "mine");

        assert!(store.load_all().is_empty());
        store
            .append(Bookmark::new("GitHub", "https://github.com"))
            .unwrap();

        assert!(nested.join("mine.json").exists());
    }

    #[test]
    fn test_hand_edited_garbage_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("bookmarks.json"), "[{\"siteName\": 1}]").unwrap();

        let store = BookmarkStore::with_default_key(FileKeyValueStore::new(temp_dir.path()));

        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_traversal_key_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut kv = FileKeyValueStore::new(temp_dir.path());

        assert!(matches!(
            kv.set("../escape", "[]"),
            Err(BookmarkError::Validation(_))
        ));
    }
}
