//! Application shell: owns the live style and the preset store

use crate::clipboard;
use crate::storage::LocalStorage;
use buttonsmith_core::{ConfigChange, EditorConfig, PresetStore, PreviewState, StyleConfig};
use buttonsmith_ui::EditorView;
use dioxus::prelude::*;
use tracing::{debug, warn};

#[component]
pub fn Editor() -> Element {
    let editor_config = use_hook(EditorConfig::default);
    let mut config = use_signal(StyleConfig::default);
    let mut preview = use_signal(PreviewState::default);
    let mut presets = use_signal({
        let key = editor_config.preset_storage_key.clone();
        move || PresetStore::open(LocalStorage, key)
    });

    let preset_list = presets.read().list().to_vec();

    rsx! {
        EditorView {
            config: config(),
            preview: preview(),
            presets: preset_list,
            copied_reset_ms: editor_config.copied_reset_ms,
            on_change: move |change: ConfigChange| {
                debug!("Config change: {:?}", change);
                config.with_mut(|c| change.apply(c));
            },
            on_preview_change: move |state: PreviewState| preview.set(state),
            on_copy: move |code: String| clipboard::write_text(&code),
            on_save_preset: move |name: String| {
                let snapshot = config.read().clone();
                presets.write().save(&name, &snapshot);
            },
            on_load_preset: move |id: String| {
                let loaded = presets.read().load(&id);
                match loaded {
                    Ok(saved) => config.set(saved),
                    Err(e) => warn!("Keeping current style: {e}"),
                }
            },
            on_delete_preset: move |id: String| {
                presets.write().delete(&id);
            },
        }
    }
}
