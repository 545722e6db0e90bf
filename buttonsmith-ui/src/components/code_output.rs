//! Generated markup with a copy button

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{CheckIcon, CopyIcon};
use crate::components::utils::sleep_ms;
use dioxus::prelude::*;

/// Shows `code` and hands it to `on_copy` when the copy button is pressed.
///
/// The "Copied!" state is shown optimistically: the clipboard write is the
/// shell's business and its outcome is not reported back. Each press restarts
/// the `reset_ms` countdown; an older countdown never clears a newer one.
#[component]
pub fn CodeOutput(code: String, reset_ms: u64, on_copy: EventHandler<String>) -> Element {
    let mut copied = use_signal(|| false);
    let mut generation = use_signal(|| 0u64);

    let handle_copy = {
        let code = code.clone();
        move |_| {
            on_copy.call(code.clone());
            copied.set(true);
            let current = generation() + 1;
            generation.set(current);
            spawn(async move {
                sleep_ms(reset_ms).await;
                if generation() == current {
                    copied.set(false);
                }
            });
        }
    };

    let check_key = "check";
    let copy_key = "copy";

    rsx! {
        div { class: "relative",
            div { class: "flex items-center justify-between mb-3",
                p { class: "text-sm text-slate-400", "Generated HTML" }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Small,
                    onclick: handle_copy,
                    if copied() {
                        span { key: "{check_key}", class: "flex items-center gap-2 animate-pop-in",
                            CheckIcon {}
                            "Copied!"
                        }
                    } else {
                        span { key: "{copy_key}", class: "flex items-center gap-2 animate-pop-in",
                            CopyIcon {}
                            "Copy Code"
                        }
                    }
                }
            }
            div { class: "code-block overflow-x-auto",
                pre { class: "text-slate-200/90 whitespace-pre-wrap break-all",
                    code { "{code}" }
                }
            }
        }
    }
}
