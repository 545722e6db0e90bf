//! Lucide icons (https://lucide.dev) used by the editor chrome
//!
//! Stroke is `currentColor`, so icons take the surrounding text color.
//! Default size is w-4 h-4; override with `class`.

use dioxus::prelude::*;

/// Shared `<svg>` wrapper with lucide's stroke settings
#[component]
fn LucideSvg(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn CopyIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            rect {
                x: "9",
                y: "9",
                width: "13",
                height: "13",
                rx: "2",
                ry: "2",
            }
            path { d: "M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1" }
        }
    }
}

#[component]
pub fn CheckIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M20 6 9 17l-5-5" }
        }
    }
}

#[component]
pub fn TrashIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M3 6h18" }
            path { d: "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6" }
            path { d: "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }
        }
    }
}

/// Floppy disk (save preset)
#[component]
pub fn SaveIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M15.2 3a2 2 0 0 1 1.4.6l3.8 3.8a2 2 0 0 1 .6 1.4V19a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z" }
            path { d: "M17 21v-7a1 1 0 0 0-1-1H8a1 1 0 0 0-1 1v7" }
            path { d: "M7 3v4a1 1 0 0 0 1 1h7" }
        }
    }
}

#[component]
pub fn LinkIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" }
            path { d: "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" }
        }
    }
}

#[component]
pub fn SparklesIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0L14.06 8.5A2 2 0 0 0 15.5 9.94l6.14 1.58a.5.5 0 0 1 0 .96L15.5 14.06a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0z" }
            path { d: "M20 3v4" }
            path { d: "M22 5h-4" }
        }
    }
}

/// Hero section preview mode
#[component]
pub fn MonitorIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            rect {
                x: "2",
                y: "3",
                width: "20",
                height: "14",
                rx: "2",
            }
            path { d: "M8 21h8" }
            path { d: "M12 17v4" }
        }
    }
}

/// Card preview mode
#[component]
pub fn CreditCardIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            rect {
                x: "2",
                y: "5",
                width: "20",
                height: "14",
                rx: "2",
            }
            path { d: "M2 10h20" }
        }
    }
}

/// Email preview mode
#[component]
pub fn MailIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            rect {
                x: "2",
                y: "4",
                width: "20",
                height: "16",
                rx: "2",
            }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        }
    }
}

/// Minimal preview mode
#[component]
pub fn LayoutIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            rect {
                x: "3",
                y: "3",
                width: "18",
                height: "18",
                rx: "2",
            }
            path { d: "M3 9h18" }
            path { d: "M9 21V9" }
        }
    }
}

#[component]
pub fn SunIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        }
    }
}

#[component]
pub fn MoonIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}
