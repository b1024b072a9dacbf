//! Layout containers for the builder sidebar

use dioxus::prelude::*;

/// Titled, bordered group of controls
#[component]
pub fn EditorCard(title: String, children: Element) -> Element {
    rsx! {
        section { class: "border border-gray-700/60 rounded-lg p-4 space-y-3",
            h3 { class: "text-sm font-semibold text-white", "{title}" }
            {children}
        }
    }
}

/// Sub-item inside a card, e.g. one value prop or one field
#[component]
pub fn EditorItem(children: Element) -> Element {
    rsx! {
        div { class: "rounded-md bg-gray-800/40 p-3 space-y-2", {children} }
    }
}
