//! Full editor page layout

use crate::components::button_preview::ButtonPreview;
use crate::components::code_output::CodeOutput;
use crate::components::control_panel::ControlPanel;
use crate::components::icons::SparklesIcon;
use crate::components::preset_manager::PresetManager;
use crate::components::website_preview::WebsitePreview;
use buttonsmith_core::{generate_markup, ConfigChange, PreviewState, SavedPreset, StyleConfig};
use dioxus::prelude::*;

/// Pure view over the shell's state: controls on the left, previews, code
/// and presets on the right.
#[component]
pub fn EditorView(
    config: StyleConfig,
    preview: PreviewState,
    presets: Vec<SavedPreset>,
    copied_reset_ms: u64,
    on_change: EventHandler<ConfigChange>,
    on_preview_change: EventHandler<PreviewState>,
    on_copy: EventHandler<String>,
    on_save_preset: EventHandler<String>,
    on_load_preset: EventHandler<String>,
    on_delete_preset: EventHandler<String>,
) -> Element {
    let code = generate_markup(&config);

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100",
            // Backdrop glow
            div { class: "fixed inset-0 overflow-hidden pointer-events-none",
                div { class: "absolute top-1/4 left-1/4 w-96 h-96 bg-sky-500/10 rounded-full blur-3xl animate-pulse" }
                div {
                    class: "absolute bottom-1/4 right-1/4 w-80 h-80 bg-violet-500/10 rounded-full blur-3xl animate-pulse",
                    style: "animation-delay: 1s;",
                }
            }

            div { class: "relative z-10 max-w-6xl mx-auto px-4 py-12",
                header { class: "text-center mb-12 animate-fade-down",
                    div { class: "inline-flex items-center gap-2 px-4 py-2 rounded-full bg-sky-500/10 text-sky-400 text-sm mb-6",
                        SparklesIcon {}
                        "URL to Embed Button Generator"
                    }
                    h1 { class: "text-4xl md:text-5xl font-bold mb-4",
                        span { class: "gradient-text", "Create Beautiful" }
                        br {}
                        "Embed Buttons"
                    }
                    p { class: "text-slate-400 text-lg max-w-xl mx-auto",
                        "Transform any URL into a stylish HTML button. Customize colors, size, and copy the code instantly."
                    }
                }

                div { class: "grid lg:grid-cols-2 gap-8",
                    div { class: "glass-card rounded-2xl p-6 animate-fade-right",
                        ControlPanel { config: config.clone(), on_change }
                    }

                    div { class: "space-y-6 animate-fade-left",
                        div { class: "glass-card rounded-2xl p-6",
                            ButtonPreview { config: config.clone() }
                        }
                        div { class: "glass-card rounded-2xl p-6",
                            WebsitePreview {
                                config: config.clone(),
                                state: preview,
                                on_state_change: on_preview_change,
                            }
                        }
                        div { class: "glass-card rounded-2xl p-6",
                            CodeOutput { code, reset_ms: copied_reset_ms, on_copy }
                        }
                        div { class: "glass-card rounded-2xl p-6",
                            PresetManager {
                                presets,
                                on_save: on_save_preset,
                                on_load: on_load_preset,
                                on_delete: on_delete_preset,
                            }
                        }
                    }
                }

                footer { class: "text-center mt-12 text-slate-500 text-sm animate-fade-in",
                    "Paste the generated code into any HTML page or email template"
                }
            }
        }
    }
}
