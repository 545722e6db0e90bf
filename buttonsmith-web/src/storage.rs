//! Browser localStorage backend for presets

use buttonsmith_core::{KeyValueStore, StorageError};

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `window.localStorage`, looked up on every access so a page without
/// storage (private mode, sandboxed iframe) degrades to errors, not panics.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = get_storage().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}
