//! Emoji palette for the button label

use crate::components::button::ChromelessButton;
use buttonsmith_core::palette::ICON_GROUPS;
use buttonsmith_core::ConfigChange;
use dioxus::prelude::*;

#[component]
pub fn IconPicker(on_change: EventHandler<ConfigChange>) -> Element {
    rsx! {
        div { class: "space-y-4",
            p { class: "text-sm text-slate-400", "Add Icon to Button" }
            for (group_index , group) in ICON_GROUPS.iter().enumerate() {
                div { key: "{group.label}", class: "space-y-2",
                    p { class: "text-xs text-slate-500 uppercase tracking-wider", "{group.label}" }
                    div { class: "flex flex-wrap gap-2",
                        for (icon_index , icon) in group.icons.iter().enumerate() {
                            ChromelessButton {
                                key: "{icon.name}",
                                class: Some(
                                    "w-10 h-10 rounded-lg bg-slate-800/50 hover:bg-slate-800 border border-slate-700/50 hover:border-sky-500/50 flex items-center justify-center text-xl hover:scale-110 active:scale-95 transition-all animate-pop-in"
                                        .to_string(),
                                ),
                                style: Some(format!("animation-delay: {}ms;", group_index * 100 + icon_index * 20)),
                                title: Some(icon.name.to_string()),
                                onclick: move |_| on_change.call(icon.change()),
                                "{icon.emoji}"
                            }
                        }
                    }
                }
            }
        }
    }
}
