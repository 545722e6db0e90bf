//! On-screen preview styling and mock page state
//!
//! This is deliberately not built on the code generator: the preview applies
//! hover effects from component state rather than a CSS rule, but maps the
//! same fields to the same properties.

use crate::codegen::{HOVER_SHADOW_TINT, LINK_HOVER_OPACITY, PLACEHOLDER_LABEL};
use crate::style::{StyleBranch, StyleConfig};

/// Mock page the preview button is composited into
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewMode {
    #[default]
    Hero,
    Card,
    Email,
    /// Side-by-side light and dark backgrounds
    Minimal,
}

impl PreviewMode {
    pub const ALL: [PreviewMode; 4] = [
        PreviewMode::Hero,
        PreviewMode::Card,
        PreviewMode::Email,
        PreviewMode::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewMode::Hero => "hero",
            PreviewMode::Card => "card",
            PreviewMode::Email => "email",
            PreviewMode::Minimal => "minimal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PreviewMode::Hero => "Hero Section",
            PreviewMode::Card => "Card",
            PreviewMode::Email => "Email",
            PreviewMode::Minimal => "Minimal",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewTheme {
    #[default]
    Light,
    Dark,
}

impl PreviewTheme {
    pub fn toggled(self) -> Self {
        match self {
            PreviewTheme::Light => PreviewTheme::Dark,
            PreviewTheme::Dark => PreviewTheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == PreviewTheme::Dark
    }
}

/// Transient preview choices. Not part of [`StyleConfig`] and never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    pub mode: PreviewMode,
    pub theme: PreviewTheme,
}

/// Preview link target: `#` stands in for an empty url
pub fn preview_href(config: &StyleConfig) -> &str {
    if config.url.is_empty() {
        "#"
    } else {
        &config.url
    }
}

pub fn preview_label(config: &StyleConfig) -> &str {
    if config.button_text.is_empty() {
        PLACEHOLDER_LABEL
    } else {
        &config.button_text
    }
}

/// Inline CSS for the preview anchor, with hover effects applied when `hovered`.
pub fn anchor_style(config: &StyleConfig, hovered: bool) -> String {
    let mut decls: Vec<(&str, String)> = Vec::with_capacity(16);

    match config.branch() {
        StyleBranch::Solid {
            bg_color,
            border_radius,
            hover_bg_color,
        } => {
            let background = if hovered { hover_bg_color } else { bg_color };
            decls.push(("display", "inline-block".into()));
            decls.push(("background-color", background.into()));
            decls.push(("font-weight", "bold".into()));
            decls.push(("text-decoration", "none".into()));
            decls.push(("border-radius", format!("{border_radius}px")));
            if hovered {
                decls.push((
                    "box-shadow",
                    format!(
                        "0 {}px {}px {HOVER_SHADOW_TINT}",
                        config.hover_shadow,
                        config.hover_shadow_blur()
                    ),
                ));
            }
        }
        StyleBranch::Link => {
            decls.push(("display", "inline-flex".into()));
            decls.push(("align-items", "center".into()));
            decls.push(("gap", "8px".into()));
            decls.push(("background", "transparent".into()));
            decls.push(("font-weight", "normal".into()));
            decls.push(("text-decoration", "underline".into()));
            decls.push(("text-underline-offset", "4px".into()));
            if hovered {
                decls.push(("opacity", LINK_HOVER_OPACITY.into()));
            }
        }
    }

    decls.push(("color", config.text_color.clone()));
    decls.push(("font-size", format!("{}px", config.font_size)));
    decls.push(("padding", config.padding()));
    decls.push(("transition", "all 0.3s ease".into()));
    decls.push(("cursor", "pointer".into()));
    if hovered {
        decls.push((
            "transform",
            format!("scale({})", config.hover_scale_factor()),
        ));
    }

    decls
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}
