//! Save, load and delete named presets

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{SaveIcon, TrashIcon};
use crate::components::text_input::{TextInput, TextInputSize};
use buttonsmith_core::SavedPreset;
use dioxus::prelude::*;

fn saved_at_label(preset: &SavedPreset) -> Option<String> {
    preset.saved_at().map(|t| {
        t.with_timezone(&chrono::Local)
            .format("%b %-d, %H:%M")
            .to_string()
    })
}

/// Preset list plus a name field for saving the current style.
///
/// Callbacks carry the typed name (possibly blank) or the preset id.
#[component]
pub fn PresetManager(
    presets: Vec<SavedPreset>,
    on_save: EventHandler<String>,
    on_load: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let mut draft_name = use_signal(String::new);

    rsx! {
        div { class: "space-y-4",
            p { class: "text-sm text-slate-400", "Saved Presets" }
            div { class: "flex gap-2",
                TextInput {
                    value: draft_name(),
                    on_input: move |v| draft_name.set(v),
                    size: TextInputSize::Small,
                    placeholder: Some("Preset name"),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Small,
                    onclick: move |_| {
                        on_save.call(draft_name());
                        draft_name.set(String::new());
                    },
                    SaveIcon {}
                    "Save"
                }
            }
            if presets.is_empty() {
                p { class: "text-xs text-slate-500", "No saved presets yet" }
            } else {
                ul { class: "space-y-2",
                    for (id , preset) in presets.iter().map(|p| (p.id().to_string(), p.clone())) {
                        PresetRow { key: "{id}", preset, on_load, on_delete }
                    }
                }
            }
        }
    }
}

#[component]
fn PresetRow(
    preset: SavedPreset,
    on_load: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let swatch = format!(
        "background-color: {}; border-color: {};",
        preset.config().bg_color,
        preset.config().text_color
    );
    let name = preset.name().to_string();
    let saved_at = saved_at_label(&preset);
    let load_id = preset.id().to_string();
    let delete_id = preset.id().to_string();

    rsx! {
        li { class: "flex items-center gap-3 px-3 py-2 rounded-lg bg-slate-800/40 border border-slate-700/50",
            span { class: "w-4 h-4 shrink-0 rounded border", style: "{swatch}" }
            button {
                r#type: "button",
                class: "flex-1 min-w-0 text-left",
                title: "Load preset",
                onclick: move |_| on_load.call(load_id.clone()),
                span { class: "block truncate text-sm text-slate-200", "{name}" }
                if let Some(saved_at) = saved_at {
                    span { class: "block text-xs text-slate-500", "{saved_at}" }
                }
            }
            Button {
                variant: ButtonVariant::Danger,
                size: ButtonSize::Small,
                title: Some("Delete preset".to_string()),
                onclick: move |_| on_delete.call(delete_id.clone()),
                TrashIcon {}
            }
        }
    }
}
