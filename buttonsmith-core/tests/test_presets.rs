use buttonsmith_core::{
    backup_key, ButtonStyle, KeyValueStore, MemoryStore, PresetError, PresetStore, StorageError,
    StyleConfig,
};

const KEY: &str = "buttonsmith.presets";

fn purple_link() -> StyleConfig {
    StyleConfig {
        url: "https://example.com/signup".to_string(),
        button_text: "Sign up".to_string(),
        bg_color: "#8B5CF6".to_string(),
        text_color: "#111111".to_string(),
        hover_bg_color: "#7C3AED".to_string(),
        font_size: 18,
        padding_x: 40,
        padding_y: 10,
        border_radius: 4,
        button_style: ButtonStyle::Link,
        hover_scale: 110,
        hover_shadow: 6,
    }
}

/// Backend whose reads and writes always fail
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read("quota exceeded".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_string()))
    }
}

#[test]
fn save_then_load_round_trips_every_field() {
    let mut store = PresetStore::open(MemoryStore::new(), KEY);
    let config = purple_link();

    let id = store.save("Purple", &config);

    assert_eq!(store.load(&id), Ok(config));
}

#[test]
fn load_leaves_preset_unchanged() {
    let mut store = PresetStore::open(MemoryStore::new(), KEY);
    let id = store.save("Purple", &purple_link());

    let mut loaded = store.load(&id).unwrap();
    loaded.font_size = 99;

    assert_eq!(store.load(&id).unwrap().font_size, 18);
    assert_eq!(store.list()[0].config(), &purple_link());
}

#[test]
fn presets_survive_reopen() {
    let mut store = PresetStore::open(MemoryStore::new(), KEY);
    let first = store.save("Default", &StyleConfig::default());
    let second = store.save("Purple", &purple_link());

    let backend = store.backend().clone();
    let reopened = PresetStore::open(backend, KEY);

    let names: Vec<_> = reopened.list().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Default", "Purple"]);
    assert_eq!(reopened.load(&first), Ok(StyleConfig::default()));
    assert_eq!(reopened.load(&second), Ok(purple_link()));
}

#[test]
fn delete_removes_exactly_one_entry() {
    let mut store = PresetStore::open(MemoryStore::new(), KEY);
    let a = store.save("A", &StyleConfig::default());
    let b = store.save("B", &purple_link());
    let c = store.save(
        "C",
        &StyleConfig {
            font_size: 30,
            ..StyleConfig::default()
        },
    );
    let before: Vec<_> = store.list().to_vec();

    assert!(store.delete(&b));

    let after = store.list();
    assert_eq!(after.len(), 2);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[2]);
    assert_eq!(store.load(&b), Err(PresetError::NotFound(b.clone())));
    assert!(store.load(&a).is_ok());
    assert_eq!(store.load(&c).unwrap().font_size, 30);

    // The stored list was rewritten too
    let reopened = PresetStore::open(store.backend().clone(), KEY);
    assert_eq!(reopened.list(), after);
}

#[test]
fn blank_name_with_two_existing_presets() {
    let mut store = PresetStore::open(MemoryStore::new(), KEY);
    store.save("One", &StyleConfig::default());
    store.save("Two", &StyleConfig::default());

    let id = store.save("", &StyleConfig::default());

    let saved = store.list().iter().find(|p| p.id() == id).unwrap();
    assert_eq!(saved.name(), "Preset 3");
}

#[test]
fn ids_are_unique() {
    let mut store = PresetStore::open(MemoryStore::new(), KEY);
    let mut ids: Vec<_> = (0..20)
        .map(|i| store.save(&format!("P{i}"), &StyleConfig::default()))
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn storage_layout_is_flat_json_array() {
    let mut store = PresetStore::open(MemoryStore::new(), KEY);
    let id = store.save("Purple", &purple_link());

    let raw = store.backend().raw(KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(raw).unwrap();
    let entry = &value.as_array().unwrap()[0];

    assert_eq!(entry["id"], id.as_str());
    assert_eq!(entry["name"], "Purple");
    assert_eq!(entry["url"], "https://example.com/signup");
    assert_eq!(entry["buttonText"], "Sign up");
    assert_eq!(entry["bgColor"], "#8B5CF6");
    assert_eq!(entry["fontSize"], 18);
    assert_eq!(entry["buttonStyle"], "link");
    assert_eq!(entry["hoverScale"], 110);
}

#[test]
fn missing_store_is_empty() {
    let store = PresetStore::open(MemoryStore::new(), KEY);
    assert!(store.is_empty());
}

#[test]
fn malformed_store_is_empty() {
    for raw in ["not json", "{\"id\":\"1\"}", "[{\"name\":\"no id\"}]", ""] {
        let store = PresetStore::open(MemoryStore::with_entry(KEY, raw), KEY);
        assert!(store.is_empty(), "{raw:?} should load as empty");
    }
}

#[test]
fn malformed_store_is_kept_under_backup_key() {
    let raw = r#"[{"id":"1700000000000","name":"Half written"#;
    let mut store = PresetStore::open(MemoryStore::with_entry(KEY, raw), KEY);
    assert!(store.is_empty());

    store.save("Fresh", &StyleConfig::default());

    assert_eq!(store.backend().raw(&backup_key(KEY)), Some(raw));
    assert_ne!(store.backend().raw(KEY), Some(raw));
}

#[test]
fn readable_store_writes_no_backup() {
    let mut store = PresetStore::open(MemoryStore::new(), KEY);
    store.save("One", &StyleConfig::default());

    let reopened = PresetStore::open(store.backend().clone(), KEY);

    assert_eq!(reopened.len(), 1);
    assert!(reopened.backend().raw(&backup_key(KEY)).is_none());
}

fn clock_at_stored_id() -> i64 {
    1_700_000_000_000
}

#[test]
fn new_id_never_repeats_a_stored_one() {
    let raw = r#"[{"id":"1700000000000","name":"Old"}]"#;
    let mut store = PresetStore::with_clock(
        MemoryStore::with_entry(KEY, raw),
        KEY,
        clock_at_stored_id,
    );
    let config = StyleConfig {
        font_size: 30,
        ..StyleConfig::default()
    };

    let id = store.save("New", &config);

    assert_ne!(id, "1700000000000");
    assert_eq!(store.load(&id).unwrap().font_size, 30);

    assert!(store.delete(&id));
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].name(), "Old");
    assert_eq!(store.load("1700000000000").unwrap().font_size, 22);
}

#[test]
fn older_presets_without_hover_fields_load_with_defaults() {
    let raw = r##"[{"id":"1700000000000","name":"Old","url":"","buttonText":"Go","bgColor":"#10B981","textColor":"#FFFFFF","fontSize":20,"paddingX":24,"paddingY":12,"borderRadius":8}]"##;
    let store = PresetStore::open(MemoryStore::with_entry(KEY, raw), KEY);

    let config = store.load("1700000000000").unwrap();
    let defaults = StyleConfig::default();
    assert_eq!(config.button_text, "Go");
    assert_eq!(config.bg_color, "#10B981");
    assert_eq!(config.border_radius, 8);
    assert_eq!(config.button_style, defaults.button_style);
    assert_eq!(config.hover_scale, defaults.hover_scale);
    assert_eq!(config.hover_shadow, defaults.hover_shadow);
    assert_eq!(config.hover_bg_color, defaults.hover_bg_color);
}

#[test]
fn broken_backend_never_fails_the_caller() {
    let mut store = PresetStore::open(BrokenStore, KEY);
    assert!(store.is_empty());

    let id = store.save("Kept in memory", &purple_link());
    assert_eq!(store.len(), 1);
    assert_eq!(store.load(&id), Ok(purple_link()));

    assert!(store.delete(&id));
    assert!(store.is_empty());
}
