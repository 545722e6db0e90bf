//! Segmented control — a group of toggle buttons where one is selected

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    pub value: &'static str,
}

impl Segment {
    pub fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// A row of toggle buttons where exactly one is selected
#[component]
pub fn SegmentedControl(
    segments: Vec<Segment>,
    selected: String,
    on_select: EventHandler<&'static str>,
) -> Element {
    rsx! {
        div { class: "flex gap-1 bg-slate-800/50 rounded-lg p-1",
            for segment in &segments {
                Button {
                    variant: if segment.value == selected { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                    size: ButtonSize::Small,
                    class: Some("flex-1 justify-center".to_string()),
                    aria_pressed: Some(segment.value == selected),
                    onclick: {
                        let value = segment.value;
                        move |_| on_select.call(value)
                    },
                    "{segment.label}"
                }
            }
        }
    }
}
