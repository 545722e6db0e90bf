//! Single-field edits emitted by the control panel

use crate::style::{ButtonStyle, StyleConfig};

/// One user edit. Controls emit these; only the shell applies them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigChange {
    Url(String),
    ButtonText(String),
    BgColor(String),
    TextColor(String),
    HoverBgColor(String),
    FontSize(i32),
    PaddingX(i32),
    PaddingY(i32),
    BorderRadius(i32),
    ButtonStyle(ButtonStyle),
    HoverScale(i32),
    HoverShadow(i32),
    /// Palette shortcut: background and text color together
    ColorPair { bg: String, text: String },
    /// Icon palette shortcut: put an emoji in front of the label
    PrependIcon(String),
}

impl ConfigChange {
    pub fn apply(self, config: &mut StyleConfig) {
        match self {
            ConfigChange::Url(v) => config.url = v,
            ConfigChange::ButtonText(v) => config.button_text = v,
            ConfigChange::BgColor(v) => config.bg_color = v,
            ConfigChange::TextColor(v) => config.text_color = v,
            ConfigChange::HoverBgColor(v) => config.hover_bg_color = v,
            ConfigChange::FontSize(v) => config.font_size = v,
            ConfigChange::PaddingX(v) => config.padding_x = v,
            ConfigChange::PaddingY(v) => config.padding_y = v,
            ConfigChange::BorderRadius(v) => config.border_radius = v,
            ConfigChange::ButtonStyle(v) => config.button_style = v,
            ConfigChange::HoverScale(v) => config.hover_scale = v,
            ConfigChange::HoverShadow(v) => config.hover_shadow = v,
            ConfigChange::ColorPair { bg, text } => {
                config.bg_color = bg;
                config.text_color = text;
            }
            ConfigChange::PrependIcon(icon) => {
                config.button_text = if config.button_text.is_empty() {
                    icon
                } else {
                    format!("{icon} {}", config.button_text)
                };
            }
        }
    }
}
