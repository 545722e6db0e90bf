//! Live rendering of the configured button

use buttonsmith_core::preview::{anchor_style, preview_href, preview_label};
use buttonsmith_core::StyleConfig;
use dioxus::prelude::*;

/// The styled anchor itself. Hover effects come from local state so the
/// preview doesn't need the generated stylesheet.
#[component]
pub fn PreviewButton(config: StyleConfig) -> Element {
    let mut hovered = use_signal(|| false);
    let style = anchor_style(&config, hovered());
    let has_url = !config.url.is_empty();
    let label = preview_label(&config);

    rsx! {
        a {
            href: preview_href(&config),
            target: "_blank",
            rel: "noopener noreferrer",
            style: "{style}",
            class: "active:brightness-90",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onclick: move |e: MouseEvent| {
                if !has_url {
                    e.prevent_default();
                }
            },
            "{label}"
        }
    }
}

#[component]
pub fn ButtonPreview(config: StyleConfig) -> Element {
    rsx! {
        div { class: "flex flex-col items-center gap-4",
            p { class: "text-sm text-slate-400", "Live Preview" }
            div { class: "p-8 rounded-xl bg-slate-800/50 border border-slate-700/50 animate-pop-in",
                PreviewButton { config }
            }
        }
    }
}
