//! Durable key-value backends for preset persistence

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage not available")]
    Unavailable,
    #[error("Storage read failed: {0}")]
    Read(String),
    #[error("Storage write failed: {0}")]
    Write(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String key-value storage, such as the browser's `localStorage`.
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store, for tests and targets without durable storage
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one pre-populated entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }

    /// Raw value under `key`
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
