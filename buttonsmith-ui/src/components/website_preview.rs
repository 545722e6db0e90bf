//! The preview button composited into mock pages
//!
//! Mode and theme are transient view state owned by the shell; this view
//! only reports the user's choice back through `on_state_change`.

use crate::components::button::ChromelessButton;
use crate::components::button_preview::PreviewButton;
use crate::components::icons::{
    CreditCardIcon, LayoutIcon, MailIcon, MonitorIcon, MoonIcon, SunIcon,
};
use buttonsmith_core::{PreviewMode, PreviewState, StyleConfig};
use dioxus::prelude::*;

const TOGGLE_ACTIVE: &str = "p-2 rounded-md transition-all bg-sky-500 text-white";
const TOGGLE_IDLE: &str =
    "p-2 rounded-md transition-all text-slate-400 hover:text-white hover:bg-slate-800";

fn pick(dark: bool, dark_class: &'static str, light_class: &'static str) -> &'static str {
    if dark {
        dark_class
    } else {
        light_class
    }
}

#[component]
pub fn WebsitePreview(
    config: StyleConfig,
    state: PreviewState,
    on_state_change: EventHandler<PreviewState>,
) -> Element {
    let dark = state.theme.is_dark();
    let mode_key = state.mode.as_str();

    rsx! {
        div { class: "space-y-4",
            div { class: "flex items-center justify-between",
                p { class: "text-sm text-slate-400", "Website Preview" }
                div { class: "flex items-center gap-2",
                    ChromelessButton {
                        class: Some(pick(dark, TOGGLE_ACTIVE, TOGGLE_IDLE).to_string()),
                        title: Some(if dark { "Switch to Light" } else { "Switch to Dark" }.to_string()),
                        onclick: move |_| {
                            on_state_change.call(PreviewState {
                                theme: state.theme.toggled(),
                                ..state
                            })
                        },
                        if dark {
                            MoonIcon {}
                        } else {
                            SunIcon {}
                        }
                    }
                    div { class: "flex gap-1 p-1 rounded-lg bg-slate-800/50",
                        for mode in PreviewMode::ALL {
                            ChromelessButton {
                                key: "{mode:?}",
                                class: Some(pick(mode == state.mode, TOGGLE_ACTIVE, TOGGLE_IDLE).to_string()),
                                title: Some(mode.label().to_string()),
                                aria_pressed: Some(mode == state.mode),
                                onclick: move |_| on_state_change.call(PreviewState { mode, ..state }),
                                ModeIcon { mode }
                            }
                        }
                    }
                }
            }

            // Keyed on mode and theme so switching replays the entrance animation
            div {
                key: "{mode_key}-{dark}",
                class: "rounded-xl overflow-hidden border border-slate-700/50 animate-fade-up",
                {
                    match state.mode {
                        PreviewMode::Hero => rsx! {
                            HeroPage { config, dark }
                        },
                        PreviewMode::Card => rsx! {
                            CardPage { config, dark }
                        },
                        PreviewMode::Email => rsx! {
                            EmailPage { config, dark }
                        },
                        PreviewMode::Minimal => rsx! {
                            SplitPage { config }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn ModeIcon(mode: PreviewMode) -> Element {
    match mode {
        PreviewMode::Hero => rsx! {
            MonitorIcon {}
        },
        PreviewMode::Card => rsx! {
            CreditCardIcon {}
        },
        PreviewMode::Email => rsx! {
            MailIcon {}
        },
        PreviewMode::Minimal => rsx! {
            LayoutIcon {}
        },
    }
}

/// Grey placeholder bar standing in for text
#[component]
fn TextBar(class: String) -> Element {
    rsx! {
        div { class: "rounded {class}" }
    }
}

#[component]
fn HeroPage(config: StyleConfig, dark: bool) -> Element {
    let backdrop = pick(
        dark,
        "from-slate-950 via-slate-900 to-slate-950",
        "from-slate-100 via-slate-50 to-slate-100",
    );
    let chrome = pick(dark, "bg-slate-800/50", "bg-slate-300/50");
    let address_bar = pick(dark, "bg-slate-700/50", "bg-slate-200/80");
    let page = pick(dark, "bg-slate-900", "bg-white");
    let heading = pick(dark, "bg-slate-700", "bg-slate-200");
    let body = pick(dark, "bg-slate-800", "bg-slate-100");

    rsx! {
        div { class: "p-8 bg-gradient-to-br {backdrop}",
            // Browser chrome
            div { class: "rounded-t-lg p-2 flex items-center gap-2 {chrome}",
                div { class: "flex gap-1.5",
                    div { class: "w-3 h-3 rounded-full bg-red-500/80" }
                    div { class: "w-3 h-3 rounded-full bg-yellow-500/80" }
                    div { class: "w-3 h-3 rounded-full bg-green-500/80" }
                }
                div { class: "flex-1 rounded-md h-6 mx-8 {address_bar}" }
            }
            div { class: "rounded-b-lg p-8 text-center space-y-4 {page}",
                div { class: "w-16 h-16 rounded-2xl bg-gradient-to-br from-blue-500 to-purple-600 mx-auto" }
                div { class: "space-y-2",
                    TextBar { class: format!("h-8 rounded-lg w-3/4 mx-auto {heading}") }
                    TextBar { class: format!("h-4 w-2/3 mx-auto {body}") }
                    TextBar { class: format!("h-4 w-1/2 mx-auto {body}") }
                }
                div { class: "pt-4",
                    PreviewButton { config }
                }
            }
        }
    }
}

#[component]
fn CardPage(config: StyleConfig, dark: bool) -> Element {
    let title = pick(dark, "bg-slate-700", "bg-slate-200");
    let body = pick(dark, "bg-slate-700/50", "bg-slate-100");
    let backdrop = pick(dark, "from-slate-950 to-slate-900", "from-slate-100 to-slate-200");
    let surface = pick(dark, "bg-slate-800", "bg-white");

    rsx! {
        div { class: "p-8 bg-gradient-to-br {backdrop}",
            div { class: "max-w-sm mx-auto rounded-2xl shadow-xl overflow-hidden {surface}",
                div { class: "h-32 bg-gradient-to-br from-indigo-500 to-purple-600" }
                div { class: "p-6 space-y-4",
                    div { class: "space-y-2",
                        TextBar { class: format!("h-5 w-3/4 {title}") }
                        TextBar { class: format!("h-3 w-full {body}") }
                        TextBar { class: format!("h-3 w-5/6 {body}") }
                    }
                    div { class: "pt-2",
                        PreviewButton { config }
                    }
                }
            }
        }
    }
}

#[component]
fn EmailPage(config: StyleConfig, dark: bool) -> Element {
    let strong = pick(dark, "bg-slate-700", "bg-slate-200");
    let body = pick(dark, "bg-slate-700/50", "bg-slate-100");
    let chrome = pick(
        dark,
        "bg-slate-900 border-slate-700",
        "bg-slate-50 border-slate-200",
    );
    let sender = pick(dark, "bg-slate-700", "bg-slate-300");
    let subject = pick(dark, "bg-slate-700/50", "bg-slate-200");
    let backdrop = pick(dark, "bg-slate-950", "bg-slate-200");
    let surface = pick(dark, "bg-slate-800", "bg-white");

    rsx! {
        div { class: "p-6 {backdrop}",
            div { class: "max-w-md mx-auto rounded-lg shadow-lg overflow-hidden {surface}",
                // Header: sender and subject
                div { class: "px-6 py-4 border-b {chrome}",
                    TextBar { class: format!("h-4 w-1/3 mb-2 {sender}") }
                    TextBar { class: format!("h-3 w-1/4 {subject}") }
                }
                div { class: "p-6 space-y-4",
                    div { class: "space-y-2",
                        TextBar { class: format!("h-4 w-1/4 {strong}") }
                        TextBar { class: format!("h-3 w-full {body}") }
                        TextBar { class: format!("h-3 w-full {body}") }
                        TextBar { class: format!("h-3 w-3/4 {body}") }
                    }
                    div { class: "py-4 text-center",
                        PreviewButton { config }
                    }
                    div { class: "space-y-2",
                        TextBar { class: format!("h-3 w-full {body}") }
                        TextBar { class: format!("h-3 w-2/3 {body}") }
                    }
                }
                div { class: "px-6 py-3 border-t {chrome}",
                    TextBar { class: format!("h-2 w-1/2 mx-auto {strong}") }
                }
            }
        }
    }
}

/// Light and dark backgrounds side by side; ignores the theme toggle
#[component]
fn SplitPage(config: StyleConfig) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 gap-0",
            div { class: "bg-white p-8 flex items-center justify-center",
                div { class: "text-center",
                    p { class: "text-xs text-slate-400 mb-3", "Light Mode" }
                    PreviewButton { config: config.clone() }
                }
            }
            div { class: "bg-slate-900 p-8 flex items-center justify-center",
                div { class: "text-center",
                    p { class: "text-xs text-slate-500 mb-3", "Dark Mode" }
                    PreviewButton { config }
                }
            }
        }
    }
}
