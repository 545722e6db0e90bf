//! Paste-ready HTML/CSS markup for a [`StyleConfig`]
//!
//! The output is a `<style>` block with the hover rule followed by the
//! anchor itself. Values are interpolated verbatim: nothing is escaped,
//! rounded or validated, so the same config always yields the same bytes.

use crate::style::{StyleBranch, StyleConfig};

/// Used in `href` when the url is empty
pub const PLACEHOLDER_URL: &str = "https://your-url.com";

/// Used as the label when the button text is empty
pub const PLACEHOLDER_LABEL: &str = "🚀 Click Me";

/// Class tying the anchor to its hover rule
pub const BUTTON_CLASS: &str = "embed-btn";

/// Opacity applied to link-style buttons on hover
pub const LINK_HOVER_OPACITY: &str = "0.8";

/// Tint of the solid-style hover shadow
pub const HOVER_SHADOW_TINT: &str = "rgba(0,0,0,0.2)";

/// Generate the markup for `config`.
pub fn generate_markup(config: &StyleConfig) -> String {
    let href = if config.url.is_empty() {
        PLACEHOLDER_URL
    } else {
        config.url.as_str()
    };
    let label = if config.button_text.is_empty() {
        PLACEHOLDER_LABEL
    } else {
        config.button_text.as_str()
    };

    let (anchor_style, hover_rule) = match config.branch() {
        StyleBranch::Solid {
            bg_color,
            border_radius,
            hover_bg_color,
        } => (
            solid_anchor_style(config, bg_color, border_radius),
            solid_hover_rule(config, hover_bg_color),
        ),
        StyleBranch::Link => (link_anchor_style(config), link_hover_rule(config)),
    };

    format!(
        "<style>\n\
         \x20 .{BUTTON_CLASS}:hover {{\n\
         {hover_rule}\
         \x20 }}\n\
         </style>\n\
         <a href=\"{href}\" class=\"{BUTTON_CLASS}\" target=\"_blank\" rel=\"noopener noreferrer\"\n\
         \x20  style=\"{anchor_style}\">\n\
         \x20   {label}\n\
         </a>"
    )
}

fn solid_anchor_style(config: &StyleConfig, bg_color: &str, border_radius: i32) -> String {
    format!(
        "display: inline-block; background-color: {bg_color}; color: {}; \
         font-size: {}px; font-weight: bold; padding: {}; text-decoration: none; \
         border-radius: {border_radius}px; transition: all 0.3s ease;",
        config.text_color,
        config.font_size,
        config.padding(),
    )
}

fn link_anchor_style(config: &StyleConfig) -> String {
    format!(
        "display: inline-flex; align-items: center; gap: 8px; background: transparent; \
         color: {}; font-size: {}px; font-weight: normal; padding: {}; \
         text-decoration: underline; text-underline-offset: 4px; transition: all 0.3s ease;",
        config.text_color,
        config.font_size,
        config.padding(),
    )
}

fn solid_hover_rule(config: &StyleConfig, hover_bg_color: &str) -> String {
    // !important because the anchor's inline background would otherwise win
    format!(
        "    background-color: {hover_bg_color} !important;\n\
         \x20   transform: scale({});\n\
         \x20   box-shadow: 0 {}px {}px {HOVER_SHADOW_TINT};\n",
        config.hover_scale_factor(),
        config.hover_shadow,
        config.hover_shadow_blur(),
    )
}

fn link_hover_rule(config: &StyleConfig) -> String {
    format!(
        "    transform: scale({});\n\
         \x20   opacity: {LINK_HOVER_OPACITY};\n",
        config.hover_scale_factor(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ButtonStyle;

    fn example_config() -> StyleConfig {
        StyleConfig {
            url: String::new(),
            button_text: String::new(),
            bg_color: "#1DA1F2".into(),
            text_color: "#FFFFFF".into(),
            font_size: 22,
            padding_x: 30,
            padding_y: 15,
            border_radius: 12,
            button_style: ButtonStyle::Solid,
            hover_scale: 105,
            hover_shadow: 20,
            hover_bg_color: "#1A91DA".into(),
        }
    }

    /// The inline style attribute of the generated anchor
    fn anchor_style(markup: &str) -> &str {
        let start = markup.find("style=\"").expect("anchor has a style attribute") + 7;
        let end = start + markup[start..].find('"').expect("style attribute is closed");
        &markup[start..end]
    }

    fn href(markup: &str) -> &str {
        let start = markup.find("href=\"").expect("anchor has an href") + 6;
        let end = start + markup[start..].find('"').expect("href is closed");
        &markup[start..end]
    }

    #[test]
    fn example_solid_markup() {
        let markup = generate_markup(&example_config());

        assert!(markup.contains("background-color: #1DA1F2"));
        assert!(markup.contains("color: #FFFFFF"));
        assert!(markup.contains("font-size: 22px"));
        assert!(markup.contains("padding: 15px 30px"));
        assert!(markup.contains("border-radius: 12px"));
        assert!(markup.contains("font-weight: bold"));
        assert!(markup.contains("display: inline-block"));
        assert!(markup.contains("transform: scale(1.05)"));
        assert!(markup.contains("box-shadow: 0 20px 40px rgba(0,0,0,0.2)"));
        assert!(markup.contains("background-color: #1A91DA !important"));
        assert_eq!(href(&markup), PLACEHOLDER_URL);
        assert!(markup.contains(PLACEHOLDER_LABEL));
    }

    #[test]
    fn exact_solid_output() {
        let config = StyleConfig {
            url: "https://example.com".into(),
            button_text: "Go".into(),
            ..example_config()
        };
        let expected = "<style>\n  .embed-btn:hover {\n    background-color: #1A91DA !important;\n    transform: scale(1.05);\n    box-shadow: 0 20px 40px rgba(0,0,0,0.2);\n  }\n</style>\n<a href=\"https://example.com\" class=\"embed-btn\" target=\"_blank\" rel=\"noopener noreferrer\"\n   style=\"display: inline-block; background-color: #1DA1F2; color: #FFFFFF; font-size: 22px; font-weight: bold; padding: 15px 30px; text-decoration: none; border-radius: 12px; transition: all 0.3s ease;\">\n    Go\n</a>";
        assert_eq!(generate_markup(&config), expected);
    }

    #[test]
    fn link_style_omits_background_and_radius() {
        let config = StyleConfig {
            button_style: ButtonStyle::Link,
            ..example_config()
        };
        let markup = generate_markup(&config);
        let style = anchor_style(&markup);

        assert!(!style.contains("background-color"));
        assert!(!style.contains("border-radius"));
        assert!(style.contains("text-decoration: underline"));
        assert!(style.contains("display: inline-flex"));
        assert!(style.contains("background: transparent"));

        // Hover: scale and opacity only
        assert!(markup.contains("transform: scale(1.05)"));
        assert!(markup.contains("opacity: 0.8"));
        assert!(!markup.contains("box-shadow"));
        assert!(!markup.contains("background-color"));
        assert!(!markup.contains("#1A91DA"));
    }

    #[test]
    fn solid_style_contains_configured_values() {
        let config = StyleConfig {
            bg_color: "#8B5CF6".into(),
            text_color: "#000000".into(),
            font_size: 14,
            padding_x: 11,
            padding_y: 7,
            border_radius: 0,
            hover_scale: 110,
            hover_shadow: 3,
            ..example_config()
        };
        let markup = generate_markup(&config);
        let style = anchor_style(&markup);

        assert!(style.contains("background-color: #8B5CF6"));
        assert!(style.contains("color: #000000"));
        assert!(style.contains("font-size: 14px"));
        assert!(style.contains("padding: 7px 11px"));
        assert!(style.contains("border-radius: 0px"));
        assert!(markup.contains("transform: scale(1.1)"));
        assert!(markup.contains("box-shadow: 0 3px 6px rgba(0,0,0,0.2)"));
    }

    #[test]
    fn url_passes_through_verbatim() {
        let config = StyleConfig {
            url: "https://shop.example.com/cart?id=7&ref=btn".into(),
            ..example_config()
        };
        let markup = generate_markup(&config);
        assert_eq!(href(&markup), "https://shop.example.com/cart?id=7&ref=btn");
        assert!(!markup.contains(PLACEHOLDER_URL));
    }

    #[test]
    fn label_passes_through_verbatim() {
        let config = StyleConfig {
            button_text: "Buy <now>".into(),
            ..example_config()
        };
        let markup = generate_markup(&config);
        assert!(markup.contains("    Buy <now>\n</a>"));
        assert!(!markup.contains(PLACEHOLDER_LABEL));
    }

    #[test]
    fn output_is_deterministic() {
        let configs = [
            example_config(),
            StyleConfig::default(),
            StyleConfig {
                button_style: ButtonStyle::Link,
                ..StyleConfig::default()
            },
        ];
        for config in configs {
            let copy = config.clone();
            assert_eq!(generate_markup(&config), generate_markup(&copy));
        }
    }
}
