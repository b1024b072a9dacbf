//! Builder form controls

use dioxus::prelude::*;

const INPUT_CLASS: &str = "w-full bg-gray-800/50 rounded-lg px-2.5 py-1.5 text-sm text-gray-300 placeholder-gray-500 focus:outline-none focus:ring-1 focus:ring-indigo-500/50";

/// Label above a control
#[component]
pub fn LabeledField(label: String, children: Element) -> Element {
    rsx! {
        label { class: "block space-y-1",
            span { class: "block text-xs font-medium text-gray-400", "{label}" }
            {children}
        }
    }
}

/// Single-line text input
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] monospace: bool,
) -> Element {
    let font_class = if monospace { "font-mono" } else { "" };

    rsx! {
        input {
            r#type: "text",
            class: "{INPUT_CLASS} {font_class}",
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}

/// Multi-line text input
#[component]
pub fn TextArea(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = 3)] rows: u32,
    #[props(default)] placeholder: Option<&'static str>,
) -> Element {
    rsx! {
        textarea {
            class: "{INPUT_CLASS} resize-y",
            rows: "{rows}",
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}

/// Color swatch plus a free-text field. The text field also accepts CSS
/// gradients, which the swatch can't show.
#[component]
pub fn ColorInput(value: String, on_input: EventHandler<String>) -> Element {
    let swatch = if value.starts_with('#') && value.len() == 7 {
        value.clone()
    } else {
        "#000000".to_string()
    };

    rsx! {
        div { class: "flex items-center gap-2",
            input {
                r#type: "color",
                class: "w-8 h-8 rounded border border-gray-700 bg-transparent cursor-pointer flex-shrink-0",
                value: "{swatch}",
                oninput: move |e| on_input.call(e.value()),
            }
            input {
                r#type: "text",
                class: "{INPUT_CLASS} font-mono",
                value: "{value}",
                placeholder: "#f97316 or linear-gradient(...)",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// Checkbox with a trailing label
#[component]
pub fn Checkbox(label: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "flex items-center gap-2 text-sm text-gray-300 cursor-pointer",
            input {
                r#type: "checkbox",
                class: "w-4 h-4 rounded bg-gray-700 border-gray-600 text-indigo-600 focus:ring-indigo-500",
                checked,
                onchange: move |e| on_change.call(e.checked()),
            }
            "{label}"
        }
    }
}

/// Native select over `(value, label)` pairs
#[component]
pub fn NativeSelect(
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "{INPUT_CLASS}",
            value: "{value}",
            onchange: move |e| on_change.call(e.value()),
            for (option_value , label) in options {
                option {
                    key: "{option_value}",
                    value: "{option_value}",
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
    }
}
