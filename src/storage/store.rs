//! Local key-value stores
//!
//! The ledger only needs a string blob under a fixed key, so storage is
//! abstracted behind a tiny key-value trait. `FileStore` keeps one JSON file
//! per key; `MemoryStore` keeps everything in a map.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};

use super::file_io::{read_text, write_atomic};

/// A synchronous string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> FintrackResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> FintrackResult<()>;

    /// Delete the value under `key`; deleting a missing key is not an error
    fn remove(&mut self, key: &str) -> FintrackResult<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FintrackResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> FintrackResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> FintrackResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Directory-backed store writing `<dir>/<key>.json` atomically
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the key files
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// File path used for `key`
    pub fn key_path(&self, key: &str) -> FintrackResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
        if !valid {
            return Err(FintrackError::Storage(format!(
                "Invalid store key: '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> FintrackResult<Option<String>> {
        read_text(self.key_path(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> FintrackResult<()> {
        write_atomic(self.key_path(key)?, value.as_bytes())
    }

    fn remove(&mut self, key: &str) -> FintrackResult<()> {
        let path = self.key_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FintrackError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &mut dyn KeyValueStore) {
        assert!(store.get("alpha").unwrap().is_none());

        store.set("alpha", "[1,2]").unwrap();
        assert_eq!(store.get("alpha").unwrap().as_deref(), Some("[1,2]"));

        store.set("alpha", "[]").unwrap();
        assert_eq!(store.get("alpha").unwrap().as_deref(), Some("[]"));

        store.remove("alpha").unwrap();
        assert!(store.get("alpha").unwrap().is_none());
        store.remove("alpha").unwrap();
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        exercise(&mut store);
    }

    #[test]
    fn test_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("data"));
        exercise(&mut store);
    }

    #[test]
    fn test_file_store_layout() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().to_path_buf());
        store.set("fintrackEntries", "[]").unwrap();

        assert!(temp_dir.path().join("fintrackEntries.json").exists());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().to_path_buf());

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
    }
}
