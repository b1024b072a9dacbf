//! Dismissible toast notifications

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use crate::stores::ToastMessage;
use dioxus::prelude::*;

/// How long a toast stays up before dismissing itself
pub const TOAST_DURATION_MS: u64 = 3000;

/// A toast in the bottom-right corner. Green for success, red for errors.
#[component]
pub fn Toast(message: ToastMessage, on_dismiss: EventHandler<()>) -> Element {
    let (color, text) = match &message {
        ToastMessage::Success(text) => ("bg-green-600", text.clone()),
        ToastMessage::Error(text) => ("bg-red-600", text.clone()),
    };

    rsx! {
        div {
            class: "fixed bottom-4 right-4 {color} text-white px-6 py-4 rounded-lg shadow-lg z-50 max-w-md",
            role: "status",
            div { class: "flex items-center justify-between gap-4",
                span { class: "flex-1", "{text}" }
                ChromelessButton {
                    class: Some("text-white hover:text-gray-200".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
