//! Storage layer for FinTrack
//!
//! Provides a small key-value abstraction over local storage, JSON file
//! helpers with atomic writes, and the entry persistence adapter.

pub mod entries;
pub mod file_io;
pub mod store;

pub use entries::{EntryStore, ENTRIES_KEY};
pub use file_io::{read_json, write_json_atomic};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;

/// Open the file-backed store under the configured data directory
pub fn open_file_store(paths: &FintrackPaths) -> Result<FileStore, FintrackError> {
    paths.ensure_directories()?;
    Ok(FileStore::new(paths.data_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_store_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = open_file_store(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(store.dir(), &temp_dir.path().join("data"));
    }
}
