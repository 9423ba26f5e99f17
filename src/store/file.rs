use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::store::{KeyValueStore, StorageError};

/// Application name used for the default store directory
const APP_NAME: &str = "linkdeck";

/// File-backed store: one file per key under a directory.
///
/// The browser original keeps everything in local storage; this is the
/// same model on disk. Keys are sanitized to filesystem-safe names, so
/// two keys that differ only in unsafe characters would collide - the
/// keys used by this crate are all plain identifiers.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create store directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Open the store at the platform data directory (`<data_dir>/linkdeck`).
    pub fn open_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Self::open(data_dir.join(APP_NAME))
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        debug!(key, bytes = value.len(), "Writing store entry");
        std::fs::write(self.entry_path(key), value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            source: e,
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Remove {
                key: key.to_string(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().to_path_buf()).unwrap();
        store.set("linkInBioData", "{\"links\":[]}").unwrap();

        // A fresh handle over the same directory sees the value
        let reopened = FileStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(
            reopened.get("linkInBioData").unwrap().as_deref(),
            Some("{\"links\":[]}")
        );
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().to_path_buf()).unwrap();
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().to_path_buf()).unwrap();
        store.remove("absent").unwrap();
    }

    #[test]
    fn test_unsafe_key_characters_are_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().to_path_buf()).unwrap();
        store.set("weird/key name", "v").unwrap();
        assert_eq!(store.get("weird/key name").unwrap().as_deref(), Some("v"));
        // Nothing escaped the store directory
        assert!(dir.path().join("weird_key_name").exists());
    }
}
