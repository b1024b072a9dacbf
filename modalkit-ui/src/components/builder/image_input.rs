//! Image reference editor: paste a URL or upload a file

use crate::components::icons::UploadIcon;
use crate::components::TextInput;
use crate::wasm_utils::read_file_as_data_url;
use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

static FILE_INPUT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// URL field with an upload button. Uploaded files are stored inline as
/// `data:` URLs.
#[component]
pub fn ImageInput(value: String, on_change: EventHandler<String>) -> Element {
    let input_id = use_hook(|| {
        let id = FILE_INPUT_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("image-upload-{id}")
    });
    let read_id = input_id.clone();
    let has_preview = !value.is_empty();

    rsx! {
        div { class: "flex items-center gap-2",
            if has_preview {
                img {
                    class: "w-8 h-8 rounded object-contain bg-gray-700 flex-shrink-0",
                    src: "{value}",
                    alt: "",
                }
            }
            TextInput {
                value: if value.starts_with("data:") { "(uploaded image)".to_string() } else { value.clone() },
                on_input: move |v| on_change.call(v),
                placeholder: "https://...",
            }
            label {
                r#for: "{input_id}",
                class: "p-1.5 rounded text-gray-400 hover:text-white hover:bg-gray-700/50 cursor-pointer flex-shrink-0",
                title: "Upload image",
                UploadIcon { class: "w-4 h-4" }
            }
            input {
                id: "{input_id}",
                r#type: "file",
                accept: "image/*",
                class: "hidden",
                onchange: move |_| {
                    let read_id = read_id.clone();
                    spawn(async move {
                        match read_file_as_data_url(&read_id).await {
                            Ok(Some(data_url)) => on_change.call(data_url),
                            Ok(None) => {}
                            Err(e) => warn!("Failed to read uploaded image: {e}"),
                        }
                    });
                },
            }
        }
    }
}
