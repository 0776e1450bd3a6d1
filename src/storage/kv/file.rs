use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::KeyValueStore;
use crate::errors::{BookmarkError, Result};

/// File backend: each key maps to `<data_dir>/<key>.json`.
///
/// The value is written verbatim, so the bookmark blob stays a readable JSON
/// array on disk.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.data_dir.join(format!("{}.json", key)))
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(BookmarkError::validation("Storage key cannot be empty"));
    }
    if key == "." || key == ".." {
        return Err(BookmarkError::validation(format!(
            "Invalid storage key: {}",
            key
        )));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(BookmarkError::validation(format!(
            "Invalid storage key '{}': only alphanumeric, dash, underscore and dot allowed",
            key
        )));
    }
    Ok(())
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No file for key '{}' at {}", key, path.display());
                Ok(None)
            }
            Err(e) => Err(BookmarkError::file_operation(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if !self.data_dir.as_os_str().is_empty() && !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(|e| {
                BookmarkError::file_operation(format!(
                    "Failed to create data directory {}: {}",
                    self.data_dir.display(),
                    e
                ))
            })?;
            info!("Created data directory: {}", self.data_dir.display());
        }
        fs::write(&path, value).map_err(|e| {
            BookmarkError::file_operation(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BookmarkError::file_operation(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
