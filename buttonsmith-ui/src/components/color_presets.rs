//! Quick color palette

use crate::components::button::ChromelessButton;
use buttonsmith_core::palette::COLOR_PRESETS;
use buttonsmith_core::ConfigChange;
use dioxus::prelude::*;

/// Swatches that set background and text color in one click
#[component]
pub fn ColorPresets(on_change: EventHandler<ConfigChange>) -> Element {
    rsx! {
        div { class: "space-y-3",
            p { class: "text-sm text-slate-400", "Quick Presets" }
            div { class: "flex flex-wrap gap-2",
                for (index , preset) in COLOR_PRESETS.iter().enumerate() {
                    ChromelessButton {
                        key: "{preset.name}",
                        class: Some(
                            "w-8 h-8 rounded-lg border-2 border-transparent hover:border-sky-500/50 hover:scale-110 active:scale-95 transition-all animate-pop-in"
                                .to_string(),
                        ),
                        style: Some(format!("background-color: {}; animation-delay: {}ms;", preset.bg, index * 50)),
                        title: Some(preset.name.to_string()),
                        onclick: move |_| on_change.call(preset.change()),
                        span { class: "sr-only", "{preset.name}" }
                    }
                }
            }
        }
    }
}
