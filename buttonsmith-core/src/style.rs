//! The editable button appearance record

use serde::{Deserialize, Serialize};

/// Which markup branch the button renders as
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    /// Filled, rounded button with background color
    #[default]
    Solid,
    /// Underlined text link, transparent background
    Link,
}

impl ButtonStyle {
    pub const ALL: [ButtonStyle; 2] = [ButtonStyle::Solid, ButtonStyle::Link];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonStyle::Solid => "solid",
            ButtonStyle::Link => "link",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ButtonStyle::Solid => "Button",
            ButtonStyle::Link => "Link",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// All editable button parameters.
///
/// Field names serialize in camelCase to match the persisted preset layout.
/// Missing fields fall back to [`StyleConfig::default`], so presets written
/// before the hover fields existed still load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    pub url: String,
    pub button_text: String,
    pub bg_color: String,
    pub text_color: String,
    pub hover_bg_color: String,
    pub font_size: i32,
    pub padding_x: i32,
    pub padding_y: i32,
    pub border_radius: i32,
    pub button_style: ButtonStyle,
    /// Percent, 100 = no scaling
    pub hover_scale: i32,
    /// Vertical shadow offset in px; blur is twice this
    pub hover_shadow: i32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            button_text: "🚀 Open Application".to_string(),
            bg_color: "#1DA1F2".to_string(),
            text_color: "#FFFFFF".to_string(),
            hover_bg_color: "#1A91DA".to_string(),
            font_size: 22,
            padding_x: 30,
            padding_y: 15,
            border_radius: 12,
            button_style: ButtonStyle::Solid,
            hover_scale: 105,
            hover_shadow: 20,
        }
    }
}

/// Style-specific view of a [`StyleConfig`].
///
/// Background, radius and hover background only mean something for solid
/// buttons, so they are only reachable through the `Solid` variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleBranch<'a> {
    Solid {
        bg_color: &'a str,
        border_radius: i32,
        hover_bg_color: &'a str,
    },
    Link,
}

impl StyleConfig {
    pub fn branch(&self) -> StyleBranch<'_> {
        match self.button_style {
            ButtonStyle::Solid => StyleBranch::Solid {
                bg_color: &self.bg_color,
                border_radius: self.border_radius,
                hover_bg_color: &self.hover_bg_color,
            },
            ButtonStyle::Link => StyleBranch::Link,
        }
    }

    /// CSS `padding` shorthand value
    pub fn padding(&self) -> String {
        format!("{}px {}px", self.padding_y, self.padding_x)
    }

    /// `hover_scale` as a CSS scale factor, formatted from the integer percent
    /// so 105 is always `1.05` and 110 is `1.1`.
    pub fn hover_scale_factor(&self) -> String {
        format_percent_factor(self.hover_scale)
    }

    /// Blur radius derived from the hover shadow offset
    pub fn hover_shadow_blur(&self) -> i32 {
        self.hover_shadow.saturating_mul(2)
    }
}

fn format_percent_factor(percent: i32) -> String {
    let sign = if percent < 0 { "-" } else { "" };
    let abs = percent.unsigned_abs();
    let whole = abs / 100;
    let frac = abs % 100;

    if frac == 0 {
        format!("{sign}{whole}")
    } else if frac % 10 == 0 {
        format!("{sign}{whole}.{}", frac / 10)
    } else {
        format!("{sign}{whole}.{frac:02}")
    }
}

/// Bounds for a numeric control. Enforced by the slider widget only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderRange {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub unit: &'static str,
}

impl SliderRange {
    pub const fn px(min: i32, max: i32) -> Self {
        Self {
            min,
            max,
            step: 1,
            unit: "px",
        }
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    pub const FONT_SIZE: SliderRange = SliderRange::px(12, 36);
    pub const PADDING_X: SliderRange = SliderRange::px(10, 60);
    pub const PADDING_Y: SliderRange = SliderRange::px(5, 40);
    pub const BORDER_RADIUS: SliderRange = SliderRange::px(0, 30);
    pub const HOVER_SHADOW: SliderRange = SliderRange::px(0, 30);
    pub const HOVER_SCALE: SliderRange = SliderRange {
        min: 100,
        max: 120,
        step: 1,
        unit: "%",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factor_formatting() {
        let mut config = StyleConfig::default();
        for (percent, expected) in [
            (105, "1.05"),
            (110, "1.1"),
            (100, "1"),
            (120, "1.2"),
            (99, "0.99"),
            (5, "0.05"),
            (0, "0"),
            (-150, "-1.5"),
        ] {
            config.hover_scale = percent;
            assert_eq!(config.hover_scale_factor(), expected, "percent {percent}");
        }
    }

    #[test]
    fn branch_follows_button_style() {
        let mut config = StyleConfig::default();
        assert_eq!(
            config.branch(),
            StyleBranch::Solid {
                bg_color: "#1DA1F2",
                border_radius: 12,
                hover_bg_color: "#1A91DA",
            }
        );

        config.button_style = ButtonStyle::Link;
        assert_eq!(config.branch(), StyleBranch::Link);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(StyleConfig::default()).unwrap();
        assert_eq!(json["buttonText"], "🚀 Open Application");
        assert_eq!(json["bgColor"], "#1DA1F2");
        assert_eq!(json["paddingX"], 30);
        assert_eq!(json["buttonStyle"], "solid");
        assert_eq!(json["hoverBgColor"], "#1A91DA");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let json = r##"{"url":"https://a.dev","bgColor":"#000000","buttonStyle":"link"}"##;
        let config: StyleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.url, "https://a.dev");
        assert_eq!(config.bg_color, "#000000");
        assert_eq!(config.button_style, ButtonStyle::Link);
        assert_eq!(config.hover_scale, 105);
        assert_eq!(config.hover_shadow, 20);
        assert_eq!(config.hover_bg_color, "#1A91DA");
    }

    #[test]
    fn slider_clamp() {
        assert_eq!(SliderRange::FONT_SIZE.clamp(4), 12);
        assert_eq!(SliderRange::FONT_SIZE.clamp(50), 36);
        assert_eq!(SliderRange::HOVER_SCALE.clamp(110), 110);
    }

    #[test]
    fn button_style_parse() {
        assert_eq!(ButtonStyle::from_str_opt("link"), Some(ButtonStyle::Link));
        assert_eq!(ButtonStyle::from_str_opt("solid"), Some(ButtonStyle::Solid));
        assert_eq!(ButtonStyle::from_str_opt("ghost"), None);
    }
}
