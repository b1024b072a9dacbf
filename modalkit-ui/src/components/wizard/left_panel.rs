//! Left-hand panel of the signup modal, one view per panel type

use super::ticker::TrustedLogos;
use crate::components::icons::{CheckIcon, DynamicIcon};
use dioxus::prelude::*;
use modalkit_common::panel::{background_css, stagger_delay_ms};
use modalkit_common::{
    FeaturesPanel, MainPanel, PanelContent, SuccessPanel, TestimonialPanel, ValuePropsPanel,
};

/// Renders a resolved step's panel content on its background
#[component]
pub fn LeftPanel(
    panel: PanelContent,
    /// CSS color or gradient
    background: String,
    /// Overrides the default padding, e.g. "32px"
    #[props(default)]
    padding: Option<String>,
    /// Entrance animation class for the content
    #[props(default)]
    animation: &'static str,
) -> Element {
    let background_style = background_css(&background);
    let padding_style = padding
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("padding: {p};"))
        .unwrap_or_default();
    let padding_class = if padding_style.is_empty() { "p-10" } else { "" };

    rsx! {
        div {
            class: "h-full flex flex-col text-white transition-colors duration-500 {padding_class}",
            style: "{background_style} {padding_style}",
            div { class: "flex-1 flex flex-col {animation}",
                match panel {
                    PanelContent::Main(content) => rsx! {
                        MainPanelView { content, background: background.clone() }
                    },
                    PanelContent::ValueProps(content) => rsx! {
                        ValuePropsPanelView { content }
                    },
                    PanelContent::Testimonial(content) => rsx! {
                        TestimonialPanelView { content }
                    },
                    PanelContent::Features(content) => rsx! {
                        FeaturesPanelView { content }
                    },
                    PanelContent::Success(content) => rsx! {
                        SuccessPanelView { content }
                    },
                }
            }
        }
    }
}

#[component]
fn MainPanelView(content: MainPanel, background: String) -> Element {
    rsx! {
        h2 { class: "text-3xl font-semibold leading-tight mb-8", "{content.headline}" }
        ul { class: "space-y-4",
            for (i , prop) in content.value_props.iter().enumerate() {
                li { key: "{i}", class: "flex items-center gap-3",
                    span { class: "flex items-center justify-center w-8 h-8 rounded-full bg-white/15 flex-shrink-0",
                        DynamicIcon { name: prop.icon.clone(), class: "w-4 h-4" }
                    }
                    span { class: "text-base", "{prop.text}" }
                }
            }
        }
        TrustedLogos {
            logos: content.trusted_by_logos.clone(),
            mode: content.logo_display_mode,
            background,
        }
    }
}

#[component]
fn ValuePropsPanelView(content: ValuePropsPanel) -> Element {
    rsx! {
        h2 { class: "text-3xl font-semibold leading-tight mb-8", "{content.headline}" }
        div { class: "space-y-4",
            for (i , stat) in content.stats.iter().enumerate() {
                div { key: "{i}", class: "rounded-xl bg-white/10 p-5 flex items-center gap-4",
                    if let Some(icon) = stat.icon.clone() {
                        span { class: "flex items-center justify-center w-10 h-10 rounded-full bg-white/15 flex-shrink-0",
                            DynamicIcon { name: icon, class: "w-5 h-5" }
                        }
                    }
                    div {
                        p { class: "text-3xl font-bold", "{stat.value}" }
                        p { class: "text-sm text-white/80", "{stat.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TestimonialPanelView(content: TestimonialPanel) -> Element {
    let author = content.author;

    rsx! {
        h2 { class: "text-3xl font-semibold leading-tight mb-8", "{content.headline}" }
        blockquote { class: "text-xl leading-relaxed mb-8", "“{content.quote}”" }
        div { class: "flex items-center gap-3",
            match author.avatar.as_deref().filter(|a| !a.is_empty()) {
                Some(avatar) => rsx! {
                    img {
                        class: "w-12 h-12 rounded-full object-cover",
                        src: "{avatar}",
                        alt: "{author.name}",
                    }
                },
                None => rsx! {
                    div { class: "w-12 h-12 rounded-full bg-white/20" }
                },
            }
            div {
                p { class: "font-semibold", "{author.name}" }
                p { class: "text-sm text-white/80", "{author.title}" }
            }
        }
    }
}

#[component]
fn FeaturesPanelView(content: FeaturesPanel) -> Element {
    rsx! {
        h2 { class: "text-3xl font-semibold leading-tight mb-8", "{content.headline}" }
        div { class: "grid grid-cols-2 gap-4",
            for (i , feature) in content.features.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "modalkit-fade-up rounded-xl bg-white/10 p-4",
                    style: format!("animation-delay: {}ms;", stagger_delay_ms(i)),
                    DynamicIcon { name: feature.icon.clone(), class: "w-5 h-5 mb-3" }
                    p { class: "font-semibold mb-1", "{feature.title}" }
                    p { class: "text-sm text-white/80", "{feature.description}" }
                }
            }
        }
    }
}

#[component]
fn SuccessPanelView(content: SuccessPanel) -> Element {
    rsx! {
        div { class: "flex items-center justify-center w-14 h-14 rounded-full bg-white/20 mb-6",
            CheckIcon { class: "w-7 h-7" }
        }
        h2 { class: "text-3xl font-semibold leading-tight mb-2", "{content.headline}" }
        p { class: "text-white/80 mb-8", "{content.subheadline}" }
        ul { class: "space-y-3",
            for (i , feature) in content.features.iter().enumerate() {
                li { key: "{i}", class: "flex items-center gap-3",
                    DynamicIcon { name: feature.icon.clone(), class: "w-5 h-5" }
                    span { "{feature.title}" }
                }
            }
        }
    }
}
