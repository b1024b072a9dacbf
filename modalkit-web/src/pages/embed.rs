use crate::api;
use dioxus::prelude::*;
use modalkit_ui::{ErrorDisplay, LoadingSpinner, SignupWizard};
use tracing::warn;

/// Stand-alone page rendered inside the embed iframe
#[component]
pub fn Embed(id: ReadSignal<String>) -> Element {
    // Reading the id inside the closure refetches when the route changes
    let config = use_resource(move || {
        let id = id();
        async move {
            api::fetch_config(&id)
                .await
                .inspect_err(|e| warn!("Failed to load modal config {id}: {e}"))
        }
    });

    let read = config.read();
    match &*read {
        None => rsx! {
            LoadingSpinner {}
        },
        Some(Err(_)) => rsx! {
            ErrorDisplay { message: "Failed to load modal configuration".to_string() }
        },
        Some(Ok(config)) => rsx! {
            div { class: "w-screen h-screen",
                SignupWizard { config: config.clone() }
            }
        },
    }
}
