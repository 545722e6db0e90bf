//! One-click color and icon shortcuts

use crate::change::ConfigChange;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
}

impl ColorPreset {
    pub fn change(&self) -> ConfigChange {
        ConfigChange::ColorPair {
            bg: self.bg.to_string(),
            text: self.text.to_string(),
        }
    }
}

#[rustfmt::skip]
pub const COLOR_PRESETS: &[ColorPreset] = &[
    ColorPreset { name: "Twitter Blue", bg: "#1DA1F2", text: "#FFFFFF" },
    ColorPreset { name: "GitHub Dark", bg: "#24292e", text: "#FFFFFF" },
    ColorPreset { name: "Success Green", bg: "#10B981", text: "#FFFFFF" },
    ColorPreset { name: "Sunset Orange", bg: "#F97316", text: "#FFFFFF" },
    ColorPreset { name: "Royal Purple", bg: "#8B5CF6", text: "#FFFFFF" },
    ColorPreset { name: "Rose Pink", bg: "#EC4899", text: "#FFFFFF" },
    ColorPreset { name: "Ocean Teal", bg: "#14B8A6", text: "#FFFFFF" },
    ColorPreset { name: "Slate Dark", bg: "#334155", text: "#FFFFFF" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon {
    pub emoji: &'static str,
    pub name: &'static str,
}

impl Icon {
    pub fn change(&self) -> ConfigChange {
        ConfigChange::PrependIcon(self.emoji.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconGroup {
    pub label: &'static str,
    pub icons: &'static [Icon],
}

const fn icon(emoji: &'static str, name: &'static str) -> Icon {
    Icon { emoji, name }
}

pub const ICON_GROUPS: &[IconGroup] = &[
    IconGroup {
        label: "Arrows",
        icons: &[
            icon("➡️", "Right Arrow"),
            icon("⬅️", "Left Arrow"),
            icon("⬆️", "Up Arrow"),
            icon("⬇️", "Down Arrow"),
            icon("↗️", "Diagonal Arrow"),
            icon("🔙", "Back"),
        ],
    },
    IconGroup {
        label: "Actions",
        icons: &[
            icon("🚀", "Rocket"),
            icon("▶️", "Play"),
            icon("⏩", "Fast Forward"),
            icon("🔗", "Link"),
            icon("📥", "Download"),
            icon("📤", "Upload"),
        ],
    },
    IconGroup {
        label: "Status",
        icons: &[
            icon("✅", "Check"),
            icon("⭐", "Star"),
            icon("🔥", "Fire"),
            icon("💡", "Idea"),
            icon("⚡", "Lightning"),
            icon("🎯", "Target"),
        ],
    },
    IconGroup {
        label: "Objects",
        icons: &[
            icon("📧", "Email"),
            icon("📱", "Phone"),
            icon("🛒", "Cart"),
            icon("💳", "Card"),
            icon("🔒", "Lock"),
            icon("🎁", "Gift"),
        ],
    },
];
