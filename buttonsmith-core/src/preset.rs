//! Named style presets persisted as one JSON array
//!
//! The whole list lives under a single storage key and is rewritten on every
//! save or delete. Storage trouble never reaches the caller: an unreadable or
//! malformed list loads as empty, and failed writes are logged while the
//! in-memory list keeps the change. A malformed list is copied to
//! [`backup_key`] first, since the next save replaces it.

use crate::storage::{KeyValueStore, StorageError};
use crate::style::StyleConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PresetError {
    #[error("Preset not found: {0}")]
    NotFound(String),
}

/// A named snapshot of a [`StyleConfig`], taken at save time.
///
/// Serialized flat: `{"id": ..., "name": ..., "url": ..., "bgColor": ..., ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPreset {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(flatten)]
    config: StyleConfig,
}

impl SavedPreset {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Save time recovered from the id. `None` if the id isn't a millisecond timestamp.
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.id
            .parse::<i64>()
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}

/// Issues time-based ids that strictly increase within a session
struct IdGenerator {
    clock: fn() -> i64,
    last: i64,
}

impl IdGenerator {
    fn next(&mut self) -> String {
        let now = (self.clock)();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}

fn wall_clock_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// CRUD over the persisted preset list
pub struct PresetStore<S: KeyValueStore> {
    backend: S,
    key: String,
    presets: Vec<SavedPreset>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> PresetStore<S> {
    /// Read the list stored under `key`. This is the only storage read.
    pub fn open(backend: S, key: impl Into<String>) -> Self {
        Self::with_clock(backend, key, wall_clock_millis)
    }

    /// Like [`PresetStore::open`], with a custom millisecond clock for ids
    pub fn with_clock(mut backend: S, key: impl Into<String>, clock: fn() -> i64) -> Self {
        let key = key.into();
        let presets = match read_all(&backend, &key) {
            Ok(presets) => {
                debug!("Loaded {} presets from '{}'", presets.len(), key);
                presets
            }
            Err(ReadError::Storage(e)) => {
                warn!("Could not read presets under '{}': {}", key, e);
                Vec::new()
            }
            Err(ReadError::Malformed { raw, source }) => {
                warn!("Ignoring malformed presets under '{}': {}", key, source);
                back_up(&mut backend, &key, &raw);
                Vec::new()
            }
        };

        // Continue after the newest stored id so a clock behind it can't reissue one
        let last = presets
            .iter()
            .filter_map(|p| p.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            backend,
            key,
            presets,
            ids: IdGenerator { clock, last },
        }
    }

    /// Saved presets in insertion order
    pub fn list(&self) -> &[SavedPreset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Snapshot `config` under `name` and persist the list. Returns the new id.
    ///
    /// A blank name becomes `"Preset N"` where N is the new list length.
    pub fn save(&mut self, name: &str, config: &StyleConfig) -> String {
        let name = if name.trim().is_empty() {
            format!("Preset {}", self.presets.len() + 1)
        } else {
            name.to_string()
        };
        let id = self.ids.next();

        info!("Saving preset '{}' ({})", name, id);
        self.presets.push(SavedPreset {
            id: id.clone(),
            name,
            config: config.clone(),
        });
        self.persist();
        id
    }

    /// The saved config for `id`. The preset itself is left as is.
    pub fn load(&self, id: &str) -> Result<StyleConfig, PresetError> {
        self.presets
            .iter()
            .find(|p| p.id == id)
            .map(|p| {
                info!("Loading preset '{}' ({})", p.name, id);
                p.config.clone()
            })
            .ok_or_else(|| PresetError::NotFound(id.to_string()))
    }

    /// Remove the preset with `id`. Returns false (and writes nothing) if absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != id);
        if self.presets.len() == before {
            debug!("Delete of unknown preset {}", id);
            return false;
        }

        info!("Deleted preset {}", id);
        self.persist();
        true
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn persist(&mut self) {
        if let Err(e) = self.write_all() {
            warn!("Failed to persist presets under '{}': {}", self.key, e);
        }
    }

    fn write_all(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.presets)?;
        self.backend.set(&self.key, &json)
    }
}

/// Key holding the last list that failed to parse
pub fn backup_key(key: &str) -> String {
    format!("{key}.backup")
}

enum ReadError {
    Storage(StorageError),
    Malformed {
        raw: String,
        source: serde_json::Error,
    },
}

fn read_all<S: KeyValueStore>(backend: &S, key: &str) -> Result<Vec<SavedPreset>, ReadError> {
    let Some(raw) = backend.get(key).map_err(ReadError::Storage)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(presets) => Ok(presets),
        Err(source) => Err(ReadError::Malformed { raw, source }),
    }
}

/// Keep an unparseable list aside before the next save overwrites it
fn back_up<S: KeyValueStore>(backend: &mut S, key: &str, raw: &str) {
    let backup = backup_key(key);
    match backend.set(&backup, raw) {
        Ok(()) => info!("Kept unreadable presets under '{}'", backup),
        Err(e) => warn!("Could not back up presets to '{}': {}", backup, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::style::ButtonStyle;

    const KEY: &str = "presets";

    fn fixed_clock() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn ids_increase_even_with_a_stuck_clock() {
        let mut store = PresetStore::with_clock(MemoryStore::new(), KEY, fixed_clock);
        let a = store.save("a", &StyleConfig::default());
        let b = store.save("b", &StyleConfig::default());
        let c = store.save("c", &StyleConfig::default());

        assert_eq!(a, "1700000000000");
        assert_eq!(b, "1700000000001");
        assert_eq!(c, "1700000000002");
    }

    #[test]
    fn ids_continue_after_newest_stored_id() {
        let json = r#"[{"id":"abc","name":"Imported"},{"id":"1700000000005","name":"Ahead"}]"#;
        let mut store =
            PresetStore::with_clock(MemoryStore::with_entry(KEY, json), KEY, fixed_clock);

        assert_eq!(store.save("next", &StyleConfig::default()), "1700000000006");
    }

    #[test]
    fn blank_name_gets_numbered() {
        let mut store = PresetStore::with_clock(MemoryStore::new(), KEY, fixed_clock);
        store.save("First", &StyleConfig::default());
        store.save("Second", &StyleConfig::default());
        store.save("   ", &StyleConfig::default());

        assert_eq!(store.list()[2].name(), "Preset 3");
    }

    #[test]
    fn load_returns_saved_snapshot() {
        let mut store = PresetStore::with_clock(MemoryStore::new(), KEY, fixed_clock);
        let mut config = StyleConfig {
            button_style: ButtonStyle::Link,
            font_size: 31,
            ..StyleConfig::default()
        };
        let id = store.save("Link", &config);

        // Later edits don't leak into the snapshot
        config.font_size = 12;

        let loaded = store.load(&id).unwrap();
        assert_eq!(loaded.font_size, 31);
        assert_eq!(loaded.button_style, ButtonStyle::Link);
    }

    #[test]
    fn load_unknown_id() {
        let store = PresetStore::open(MemoryStore::new(), KEY);
        assert_eq!(
            store.load("nope"),
            Err(PresetError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn saved_at_from_id() {
        let mut store = PresetStore::with_clock(MemoryStore::new(), KEY, fixed_clock);
        store.save("x", &StyleConfig::default());
        let saved_at = store.list()[0].saved_at().unwrap();
        assert_eq!(saved_at.timestamp_millis(), fixed_clock());
    }

    #[test]
    fn saved_at_for_foreign_id() {
        let json = r#"[{"id":"abc","name":"Imported"}]"#;
        let store = PresetStore::open(MemoryStore::with_entry(KEY, json), KEY);
        assert_eq!(store.list()[0].saved_at(), None);
    }

    #[test]
    fn delete_unknown_id_writes_nothing() {
        let mut store = PresetStore::open(MemoryStore::new(), KEY);
        assert!(!store.delete("missing"));
        assert!(store.backend().raw(KEY).is_none());
    }
}
