//! Error display component

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Full-page error shown when a modal can't be loaded
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center p-6",
            div { class: "flex items-center gap-3 bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg",
                AlertTriangleIcon { class: "w-5 h-5 flex-shrink-0" }
                p { "{message}" }
            }
        }
    }
}
