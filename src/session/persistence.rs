// ABOUTME: Key-value persistence backends for saved sessions
// Provides the Storage trait plus file-backed and in-memory implementations

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Storage key under which the full session list lives.
pub const SESSIONS_KEY: &str = "sessions";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Minimal key-value storage over serialized values, the persistence seam the
/// session store sits on. Implementations return `None` for keys that were
/// never written; deserialization is the caller's concern.
#[cfg_attr(test, mockall::automock)]
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

/// File-backed storage keeping one JSON file per key inside a data directory.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        // Write through a temp file so a crash mid-write never truncates the
        // existing data.
        let tmp_path = self.data_dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, self.key_path(key))?;
        Ok(())
    }
}

/// In-memory storage for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
