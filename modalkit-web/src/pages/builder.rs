use crate::api;
use dioxus::prelude::*;
use modalkit_common::embed::embed_url;
use modalkit_ui::stores::{BuilderState, BuilderStateStoreExt, ToastMessage};
use modalkit_ui::wasm_utils::{copy_to_clipboard, sleep_ms};
use modalkit_ui::{BuilderView, TOAST_DURATION_MS};
use tracing::{info, warn};

/// Builder page: owns the builder store and performs publish/copy
#[component]
pub fn Builder() -> Element {
    let mut state = use_store(BuilderState::default);

    // Auto-dismiss toasts
    use_effect(move || {
        if state.toast().read().is_some() {
            spawn(async move {
                sleep_ms(TOAST_DURATION_MS).await;
                state.toast().set(None);
            });
        }
    });

    let publish = move |_: ()| {
        let previous = state.publish().read().clone();
        let config = state.config().read().clone();
        state.write().publish_started();

        spawn(async move {
            match api::publish_config(&config).await {
                Ok(saved) => {
                    let url = saved
                        .embed_url
                        .unwrap_or_else(|| embed_url(&api::current_origin(), &saved.id));
                    info!("Published modal config {} at {}", saved.id, url);
                    state.write().publish_succeeded(saved.id, url);
                }
                Err(e) => {
                    warn!("Failed to publish modal config: {e}");
                    state.write().publish_failed(previous);
                }
            }
        });
    };

    let copy_embed = move |markup: String| {
        spawn(async move {
            let toast = match copy_to_clipboard(&markup).await {
                Ok(()) => ToastMessage::Success("Embed code copied to clipboard".to_string()),
                Err(e) => {
                    warn!("Failed to copy to clipboard: {e}");
                    ToastMessage::Error("Failed to copy to clipboard".to_string())
                }
            };
            state.toast().set(Some(toast));
        });
    };

    rsx! {
        BuilderView {
            state,
            on_action: move |action| state.write().dispatch(action),
            on_publish: publish,
            on_copy_embed: copy_embed,
            on_dismiss_toast: move |_| state.toast().set(None),
        }
    }
}
