//! Step list with add and remove

use crate::components::icons::{PlusIcon, TrashIcon};
use crate::components::{ChromelessButton, IconButton};
use dioxus::prelude::*;

/// One row per step; the active step is highlighted
#[component]
pub fn StepTabs(
    /// Step headlines in order
    headlines: Vec<String>,
    active: usize,
    on_select: EventHandler<usize>,
    on_add: EventHandler<()>,
    on_remove: EventHandler<usize>,
) -> Element {
    let can_remove = headlines.len() > 1;

    rsx! {
        div { class: "space-y-1",
            for (index , headline) in headlines.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "flex items-center gap-1 rounded-lg {tab_class(index == active)}",
                    ChromelessButton {
                        class: Some("flex-1 min-w-0 text-left px-3 py-2 text-sm".to_string()),
                        onclick: move |_| on_select.call(index),
                        span { class: "text-gray-500 mr-2", "{index + 1}." }
                        span { class: "truncate", "{headline}" }
                    }
                    IconButton {
                        label: "Remove step".to_string(),
                        danger: true,
                        disabled: !can_remove,
                        onclick: move |_| on_remove.call(index),
                        TrashIcon { class: "w-3.5 h-3.5" }
                    }
                }
            }
            ChromelessButton {
                class: Some("w-full flex items-center gap-2 px-3 py-2 text-sm text-gray-400 hover:text-white rounded-lg border border-dashed border-gray-700 hover:border-gray-500".to_string()),
                onclick: move |_| on_add.call(()),
                PlusIcon { class: "w-4 h-4" }
                "Add step"
            }
        }
    }
}

fn tab_class(is_active: bool) -> &'static str {
    if is_active {
        "bg-gray-700/60 text-white"
    } else {
        "text-gray-300 hover:bg-gray-800"
    }
}
