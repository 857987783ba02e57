//! Browser-style key/value storage persisted as a JSON object on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use folio_core::StorageError;

#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open the store at `path`. A missing file is an empty store; a corrupt
    /// one is logged and replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the file exists but cannot be read.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let items = if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(|e| StorageError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            match serde_json::from_str(&contents) {
                Ok(items) => items,
                Err(e) => {
                    let err = StorageError::Corrupted(e.to_string());
                    tracing::warn!("{}; starting with empty storage", err);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            items,
        })
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Store `value` under `key` and flush to disk.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the file cannot be written.
    pub fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    /// Remove `key` and flush to disk.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the file cannot be written.
    pub fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), StorageError> {
        let write_err = |message: String| StorageError::Write {
            path: self.path.display().to_string(),
            message,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }
        let contents =
            serde_json::to_string_pretty(&self.items).map_err(|e| write_err(e.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|e| write_err(e.to_string()))
    }
}
