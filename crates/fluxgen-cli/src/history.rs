//! File-backed history storage
//!
//! Persists the serialized history list as one JSON file under the
//! user's data directory - the CLI analogue of the single
//! local-storage slot a browser client would use.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use fluxgen::{DomainError, HistoryStorage};

const DATA_DIR: &str = "fluxgen";
const HISTORY_FILE: &str = "history.json";

/// One-file implementation of `HistoryStorage`
pub struct FileHistoryStorage {
    path: PathBuf,
}

impl FileHistoryStorage {
    /// Storage at the default location (~/.local/share/fluxgen/history.json)
    pub fn new() -> Result<Self> {
        let dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join(DATA_DIR);
        Ok(Self::at(dir.join(HISTORY_FILE)))
    }

    /// Storage at an explicit path
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl HistoryStorage for FileHistoryStorage {
    fn read(&self) -> Result<Option<String>, DomainError> {
        if !self.path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| DomainError::Storage(format!("Failed to read {:?}: {e}", self.path)))
    }

    fn write(&self, value: &str) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| DomainError::Storage(format!("Failed to create {:?}: {e}", dir)))?;
        }

        fs::write(&self.path, value)
            .map_err(|e| DomainError::Storage(format!("Failed to write {:?}: {e}", self.path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxgen::{GenerationResult, HistoryStore};

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileHistoryStorage::at(dir.path().join("history.json"));

        assert!(storage.read().unwrap().is_none());
        let store = HistoryStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn history_survives_a_reload_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::load(FileHistoryStorage::at(path.clone()));
        store.add(&GenerationResult::new(
            "https://cdn.example.com/a.png",
            "a boat",
            "system",
            "replicate/black-forest-labs/flux-1.1-pro",
        ));
        store.add(&GenerationResult::new(
            "https://cdn.example.com/b.png",
            "a fox",
            "system",
            "replicate/black-forest-labs/flux-1.1-pro",
        ));
        let expected: Vec<_> = store.entries().to_vec();

        let reloaded = HistoryStore::load(FileHistoryStorage::at(path));
        assert_eq!(reloaded.entries(), expected.as_slice());
        assert_eq!(reloaded.entries()[0].prompt, "a fox");
    }

    #[test]
    fn corrupt_file_hydrates_empty_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "][ definitely not json").unwrap();

        let store = HistoryStore::load(FileHistoryStorage::at(path));
        assert!(store.is_empty());
    }
}
