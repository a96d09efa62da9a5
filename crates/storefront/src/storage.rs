//! Durable key-value storage contract and backends.
//!
//! The installation registry serializes its entire collection as one value
//! under one key, so the contract is deliberately small: string keys,
//! string values, failures surfaced as errors rather than corrupted
//! content.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors surfaced by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (read, write, or rename).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A durable string key-value store.
///
/// Implementations must guarantee that a failed `set` never leaves a
/// partially-written value visible to a subsequent `get`: the previous
/// payload, or no payload, is the only acceptable outcome.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store is unreadable. A missing key
    /// is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key` as one unit.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write cannot be completed. On
    /// error the previously stored value is still intact.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one file per key under a data directory.
///
/// Writes go to a temporary file in the same directory and are renamed
/// over the target, so a crash or a full disk can never tear an existing
/// payload.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first
    /// write, not here.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path_for(key)).map_err(|e| e.error)?;
        tracing::debug!(key, bytes = value.len(), "Persisted storage key");
        Ok(())
    }
}

/// In-memory storage for ephemeral sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
