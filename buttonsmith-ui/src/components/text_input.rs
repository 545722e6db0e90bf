//! Single-line text field

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputSize {
    Small,
    Medium,
}

/// Text field that emits its full value on every keystroke
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    size: TextInputSize,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] monospace: bool,
    #[props(default)] id: Option<String>,
) -> Element {
    let padding = match size {
        TextInputSize::Small => "px-2.5 py-1.5 text-sm",
        TextInputSize::Medium => "px-3 py-2",
    };
    let font_class = if monospace { "font-mono text-sm" } else { "" };

    rsx! {
        input {
            r#type: input_type,
            class: "w-full bg-slate-800/50 border border-slate-700/50 rounded-lg text-slate-200 placeholder-slate-500 focus:outline-none focus:border-sky-500 input-glow {padding} {font_class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
