//! Color swatch picker paired with a hex text field

use crate::components::text_input::{TextInput, TextInputSize};
use dioxus::prelude::*;

/// Both inputs edit the same value. Typed text is passed through unvalidated;
/// the native picker only shows it when it happens to be `#RRGGBB`.
#[component]
pub fn ColorField(label: &'static str, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { class: "space-y-3",
            label { class: "text-sm text-slate-400", "{label}" }
            div { class: "flex items-center gap-3",
                input {
                    r#type: "color",
                    class: "w-10 h-10 shrink-0 rounded-lg cursor-pointer border-0 bg-transparent",
                    aria_label: label,
                    value: "{value}",
                    oninput: move |e| on_change.call(e.value()),
                }
                TextInput {
                    value: value.clone(),
                    on_input: on_change,
                    size: TextInputSize::Small,
                    monospace: true,
                }
            }
        }
    }
}
