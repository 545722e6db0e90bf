//! Form controls for every [`StyleConfig`] field
//!
//! Each widget reads one field from the snapshot and emits a single
//! [`ConfigChange`]; nothing here mutates the config.

use crate::components::color_field::ColorField;
use crate::components::color_presets::ColorPresets;
use crate::components::icon_picker::IconPicker;
use crate::components::icons::LinkIcon;
use crate::components::segmented_control::{Segment, SegmentedControl};
use crate::components::slider_control::SliderControl;
use crate::components::text_input::{TextInput, TextInputSize};
use buttonsmith_core::{ButtonStyle, ConfigChange, SliderRange, StyleConfig};
use dioxus::prelude::*;

#[component]
pub fn ControlPanel(config: StyleConfig, on_change: EventHandler<ConfigChange>) -> Element {
    let is_solid = config.button_style == ButtonStyle::Solid;
    let style_segments: Vec<Segment> = ButtonStyle::ALL
        .iter()
        .map(|s| Segment::new(s.label(), s.as_str()))
        .collect();

    rsx! {
        div { class: "space-y-6",
            div { class: "space-y-3",
                label {
                    r#for: "target-url",
                    class: "text-sm text-slate-400 flex items-center gap-2",
                    LinkIcon {}
                    "Target URL"
                }
                TextInput {
                    value: config.url.clone(),
                    on_input: move |v| on_change.call(ConfigChange::Url(v)),
                    size: TextInputSize::Medium,
                    input_type: "url",
                    placeholder: Some("https://your-website.com"),
                    id: Some("target-url".to_string()),
                }
            }

            div { class: "space-y-3",
                label { r#for: "button-text", class: "text-sm text-slate-400", "Button Text" }
                TextInput {
                    value: config.button_text.clone(),
                    on_input: move |v| on_change.call(ConfigChange::ButtonText(v)),
                    size: TextInputSize::Medium,
                    placeholder: Some("🚀 Open Application"),
                    id: Some("button-text".to_string()),
                }
            }

            div { class: "space-y-3",
                label { class: "text-sm text-slate-400", "Style" }
                SegmentedControl {
                    segments: style_segments,
                    selected: config.button_style.as_str().to_string(),
                    on_select: move |value: &'static str| {
                        if let Some(style) = ButtonStyle::from_str_opt(value) {
                            on_change.call(ConfigChange::ButtonStyle(style));
                        }
                    },
                }
            }

            ColorPresets { on_change }

            IconPicker { on_change }

            div { class: "grid grid-cols-2 gap-4",
                if is_solid {
                    ColorField {
                        label: "Background",
                        value: config.bg_color.clone(),
                        on_change: move |v| on_change.call(ConfigChange::BgColor(v)),
                    }
                }
                ColorField {
                    label: "Text Color",
                    value: config.text_color.clone(),
                    on_change: move |v| on_change.call(ConfigChange::TextColor(v)),
                }
                if is_solid {
                    ColorField {
                        label: "Hover Background",
                        value: config.hover_bg_color.clone(),
                        on_change: move |v| on_change.call(ConfigChange::HoverBgColor(v)),
                    }
                }
            }

            div { class: "space-y-4 pt-2",
                SliderControl {
                    label: "Font Size",
                    value: config.font_size,
                    range: SliderRange::FONT_SIZE,
                    on_change: move |v| on_change.call(ConfigChange::FontSize(v)),
                }
                SliderControl {
                    label: "Horizontal Padding",
                    value: config.padding_x,
                    range: SliderRange::PADDING_X,
                    on_change: move |v| on_change.call(ConfigChange::PaddingX(v)),
                }
                SliderControl {
                    label: "Vertical Padding",
                    value: config.padding_y,
                    range: SliderRange::PADDING_Y,
                    on_change: move |v| on_change.call(ConfigChange::PaddingY(v)),
                }
                if is_solid {
                    SliderControl {
                        label: "Border Radius",
                        value: config.border_radius,
                        range: SliderRange::BORDER_RADIUS,
                        on_change: move |v| on_change.call(ConfigChange::BorderRadius(v)),
                    }
                }
            }

            div { class: "space-y-4 pt-2",
                p { class: "text-sm text-slate-400", "Hover Effect" }
                SliderControl {
                    label: "Hover Scale",
                    value: config.hover_scale,
                    range: SliderRange::HOVER_SCALE,
                    on_change: move |v| on_change.call(ConfigChange::HoverScale(v)),
                }
                if is_solid {
                    SliderControl {
                        label: "Hover Shadow",
                        value: config.hover_shadow,
                        range: SliderRange::HOVER_SHADOW,
                        on_change: move |v| on_change.call(ConfigChange::HoverShadow(v)),
                    }
                }
            }
        }
    }
}
