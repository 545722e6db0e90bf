//! Editor chrome buttons

use dioxus::prelude::*;

/// Unstyled button: type and accessibility attributes only.
/// Used by [`Button`] and by swatch/icon tiles that bring their own styling.
#[component]
pub fn ChromelessButton(
    #[props(default)] class: Option<String>,
    #[props(default)] style: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            style: style.as_deref(),
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|p| if p { "true" } else { "false" }),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Accent tint - copy, save
    Primary,
    /// Red text - delete
    Danger,
    /// Text only until hovered
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let padding = match size {
        ButtonSize::Small => "px-2.5 py-1.5 text-sm",
        ButtonSize::Medium => "px-3 py-2 text-sm",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-sky-500/10 text-sky-400 hover:bg-sky-500/20",
        ButtonVariant::Danger => "text-slate-500 hover:text-red-400 hover:bg-red-500/10",
        ButtonVariant::Ghost => "text-slate-400 hover:text-white hover:bg-slate-700/50",
    };

    let base = "inline-flex items-center gap-2 rounded-lg transition-colors hover:scale-[1.02] active:scale-[0.98]";
    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            class: Some(computed_class),
            title,
            aria_pressed,
            onclick,
            {children}
        }
    }
}
