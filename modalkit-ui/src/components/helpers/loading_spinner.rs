//! Loading spinner component

use dioxus::prelude::*;

/// Centered spinner with a message
#[component]
pub fn LoadingSpinner(
    /// Message to display next to spinner (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex justify-center items-center",
            div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-gray-500" }
            p { class: "ml-4 text-gray-500", "{message}" }
        }
    }
}
