//! Publish button and embed code

use super::card::EditorCard;
use crate::components::icons::{CopyIcon, ExternalLinkIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::stores::PublishStatus;
use dioxus::prelude::*;
use modalkit_common::embed::iframe_markup;

#[component]
pub fn PublishPanel(
    status: PublishStatus,
    on_publish: EventHandler<()>,
    /// Receives the iframe markup to put on the clipboard
    on_copy: EventHandler<String>,
) -> Element {
    let publishing = status == PublishStatus::Publishing;

    rsx! {
        EditorCard { title: "Publish".to_string(),
            p { class: "text-sm text-gray-400",
                "Publishing saves a snapshot of this modal and gives you an embed code."
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                loading: publishing,
                onclick: move |_| on_publish.call(()),
                if publishing {
                    "Publishing..."
                } else {
                    "Publish modal"
                }
            }
            if let PublishStatus::Published { embed_url, .. } = status {
                EmbedCode { embed_url, on_copy }
            }
        }
    }
}

#[component]
fn EmbedCode(embed_url: String, on_copy: EventHandler<String>) -> Element {
    let markup = iframe_markup(&embed_url);
    let to_copy = markup.clone();

    rsx! {
        div { class: "space-y-2",
            a {
                class: "inline-flex items-center gap-1 text-sm text-indigo-400 hover:text-indigo-300 break-all",
                href: "{embed_url}",
                target: "_blank",
                rel: "noopener",
                "{embed_url}"
                ExternalLinkIcon { class: "w-3.5 h-3.5 flex-shrink-0" }
            }
            pre { class: "text-xs font-mono bg-gray-900 text-gray-300 rounded-lg p-3 whitespace-pre-wrap break-all select-text",
                "{markup}"
            }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                onclick: move |_| on_copy.call(to_copy.clone()),
                CopyIcon { class: "w-3.5 h-3.5" }
                "Copy embed code"
            }
        }
    }
}
