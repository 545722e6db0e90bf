//! Labelled range slider

use buttonsmith_core::SliderRange;
use dioxus::prelude::*;

/// Range slider bound to one integer field. The widget is the only place
/// the range is enforced; values outside it are clamped on change.
#[component]
pub fn SliderControl(
    label: &'static str,
    value: i32,
    range: SliderRange,
    on_change: EventHandler<i32>,
) -> Element {
    rsx! {
        div { class: "space-y-3",
            div { class: "flex justify-between items-center",
                label { class: "text-sm text-slate-400", "{label}" }
                span { class: "text-sm font-mono text-sky-400", "{value}{range.unit}" }
            }
            input {
                r#type: "range",
                class: "w-full accent-sky-500 cursor-pointer",
                aria_label: label,
                min: "{range.min}",
                max: "{range.max}",
                step: "{range.step}",
                value: "{value}",
                oninput: move |e| {
                    if let Ok(parsed) = e.value().parse::<i32>() {
                        on_change.call(range.clamp(parsed));
                    }
                },
            }
        }
    }
}
