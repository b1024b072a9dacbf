//! Editors for each panel type

use super::card::{EditorCard, EditorItem};
use super::icon_select::IconSelect;
use super::image_input::ImageInput;
use crate::components::icons::{PlusIcon, TrashIcon};
use crate::components::{
    Button, ButtonSize, ButtonVariant, IconButton, LabeledField, SegmentedControl, Segment,
    TextArea, TextInput,
};
use dioxus::prelude::*;
use modalkit_common::builder::PanelEdit;
use modalkit_common::{
    Feature, FeaturesPanel, LogoDisplayMode, MainPanel, PanelContent, Stat, SuccessFeature,
    SuccessPanel, TestimonialPanel, TrustedLogo, ValueProp, ValuePropsPanel,
};

/// Editor matching the step's panel content
#[component]
pub fn PanelEditor(panel: PanelContent, on_edit: EventHandler<PanelEdit>) -> Element {
    let headline = panel.headline().to_string();

    rsx! {
        EditorCard { title: "Panel content".to_string(),
            LabeledField { label: "Panel headline".to_string(),
                TextInput {
                    value: headline,
                    on_input: move |v| on_edit.call(PanelEdit::Headline(v)),
                }
            }
            match panel {
                PanelContent::Main(content) => rsx! {
                    MainPanelEditor { content, on_edit }
                },
                PanelContent::ValueProps(content) => rsx! {
                    ValuePropsEditor { content, on_edit }
                },
                PanelContent::Testimonial(content) => rsx! {
                    TestimonialEditor { content, on_edit }
                },
                PanelContent::Features(content) => rsx! {
                    FeaturesEditor { content, on_edit }
                },
                PanelContent::Success(content) => rsx! {
                    SuccessEditor { content, on_edit }
                },
            }
        }
    }
}

#[component]
fn AddButton(label: String, onclick: EventHandler<()>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Small,
            onclick: move |_| onclick.call(()),
            PlusIcon { class: "w-3.5 h-3.5" }
            "{label}"
        }
    }
}

#[component]
fn RemoveButton(label: String, onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton { label, danger: true, onclick: move |_| onclick.call(()),
            TrashIcon { class: "w-3.5 h-3.5" }
        }
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

#[component]
fn MainPanelEditor(content: MainPanel, on_edit: EventHandler<PanelEdit>) -> Element {
    let mode = match content.logo_display_mode {
        LogoDisplayMode::Ticker => "ticker",
        LogoDisplayMode::Static => "static",
    };

    rsx! {
        p { class: "text-xs font-medium text-gray-400", "Value props" }
        for (index , prop) in content.value_props.iter().enumerate() {
            ValuePropRow { key: "{index}", index, prop: prop.clone(), on_edit }
        }
        AddButton {
            label: "Add value prop".to_string(),
            onclick: move |_| on_edit.call(PanelEdit::AddValueProp),
        }

        p { class: "text-xs font-medium text-gray-400 pt-2", "Trusted by logos" }
        SegmentedControl {
            segments: vec![Segment::new("Ticker", "ticker"), Segment::new("Static", "static")],
            selected: mode,
            on_select: move |value: &'static str| {
                let mode = if value == "static" { LogoDisplayMode::Static } else { LogoDisplayMode::Ticker };
                on_edit.call(PanelEdit::LogoDisplayMode(mode));
            },
        }
        for logo in content.trusted_by_logos.iter() {
            LogoRow { key: "{logo.id}", logo: logo.clone(), on_edit }
        }
        AddButton {
            label: "Add logo".to_string(),
            onclick: move |_| on_edit.call(PanelEdit::AddLogo),
        }
    }
}

#[component]
fn ValuePropRow(index: usize, prop: ValueProp, on_edit: EventHandler<PanelEdit>) -> Element {
    rsx! {
        EditorItem {
            div { class: "flex items-center gap-2",
                div { class: "w-36 flex-shrink-0",
                    IconSelect {
                        value: Some(prop.icon.clone()),
                        on_change: move |icon: Option<String>| {
                            on_edit.call(PanelEdit::ValuePropIcon(index, icon.unwrap_or_default()))
                        },
                    }
                }
                TextInput {
                    value: prop.text.clone(),
                    on_input: move |v| on_edit.call(PanelEdit::ValuePropText(index, v)),
                }
                RemoveButton {
                    label: "Remove value prop".to_string(),
                    onclick: move |_| on_edit.call(PanelEdit::RemoveValueProp(index)),
                }
            }
        }
    }
}

#[component]
fn LogoRow(logo: TrustedLogo, on_edit: EventHandler<PanelEdit>) -> Element {
    let url_id = logo.id.clone();
    let alt_id = logo.id.clone();
    let remove_id = logo.id.clone();

    rsx! {
        EditorItem {
            div { class: "flex items-center gap-2",
                div { class: "flex-1 space-y-2",
                    ImageInput {
                        value: logo.url.clone(),
                        on_change: move |url| on_edit.call(PanelEdit::LogoUrl(url_id.clone(), url)),
                    }
                    TextInput {
                        value: logo.alt.clone(),
                        on_input: move |alt| on_edit.call(PanelEdit::LogoAlt(alt_id.clone(), alt)),
                        placeholder: "Alt text",
                    }
                }
                RemoveButton {
                    label: "Remove logo".to_string(),
                    onclick: move |_| on_edit.call(PanelEdit::RemoveLogo(remove_id.clone())),
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// value-props
// ---------------------------------------------------------------------------

#[component]
fn ValuePropsEditor(content: ValuePropsPanel, on_edit: EventHandler<PanelEdit>) -> Element {
    rsx! {
        p { class: "text-xs font-medium text-gray-400", "Stats" }
        for (index , stat) in content.stats.iter().enumerate() {
            StatRow { key: "{index}", index, stat: stat.clone(), on_edit }
        }
        AddButton {
            label: "Add stat".to_string(),
            onclick: move |_| on_edit.call(PanelEdit::AddStat),
        }
    }
}

#[component]
fn StatRow(index: usize, stat: Stat, on_edit: EventHandler<PanelEdit>) -> Element {
    rsx! {
        EditorItem {
            div { class: "flex items-center gap-2",
                div { class: "w-24 flex-shrink-0",
                    TextInput {
                        value: stat.value.clone(),
                        on_input: move |v| on_edit.call(PanelEdit::StatValue(index, v)),
                        placeholder: "14x",
                    }
                }
                TextInput {
                    value: stat.label.clone(),
                    on_input: move |v| on_edit.call(PanelEdit::StatLabel(index, v)),
                    placeholder: "Label",
                }
                RemoveButton {
                    label: "Remove stat".to_string(),
                    onclick: move |_| on_edit.call(PanelEdit::RemoveStat(index)),
                }
            }
            IconSelect {
                value: stat.icon.clone(),
                optional: true,
                on_change: move |icon| on_edit.call(PanelEdit::StatIcon(index, icon)),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// testimonial
// ---------------------------------------------------------------------------

#[component]
fn TestimonialEditor(content: TestimonialPanel, on_edit: EventHandler<PanelEdit>) -> Element {
    let author = content.author;

    rsx! {
        LabeledField { label: "Quote".to_string(),
            TextArea {
                value: content.quote.clone(),
                rows: 4,
                on_input: move |v| on_edit.call(PanelEdit::Quote(v)),
            }
        }
        LabeledField { label: "Author name".to_string(),
            TextInput {
                value: author.name.clone(),
                on_input: move |v| on_edit.call(PanelEdit::AuthorName(v)),
            }
        }
        LabeledField { label: "Author title".to_string(),
            TextInput {
                value: author.title.clone(),
                on_input: move |v| on_edit.call(PanelEdit::AuthorTitle(v)),
            }
        }
        LabeledField { label: "Author avatar".to_string(),
            ImageInput {
                value: author.avatar.clone().unwrap_or_default(),
                on_change: move |v: String| {
                    on_edit.call(PanelEdit::AuthorAvatar(if v.is_empty() { None } else { Some(v) }))
                },
            }
        }
    }
}

// ---------------------------------------------------------------------------
// features
// ---------------------------------------------------------------------------

#[component]
fn FeaturesEditor(content: FeaturesPanel, on_edit: EventHandler<PanelEdit>) -> Element {
    rsx! {
        p { class: "text-xs font-medium text-gray-400", "Features" }
        for (index , feature) in content.features.iter().enumerate() {
            FeatureRow { key: "{index}", index, feature: feature.clone(), on_edit }
        }
        AddButton {
            label: "Add feature".to_string(),
            onclick: move |_| on_edit.call(PanelEdit::AddFeature),
        }
    }
}

#[component]
fn FeatureRow(index: usize, feature: Feature, on_edit: EventHandler<PanelEdit>) -> Element {
    rsx! {
        EditorItem {
            div { class: "flex items-center gap-2",
                TextInput {
                    value: feature.title.clone(),
                    on_input: move |v| on_edit.call(PanelEdit::FeatureTitle(index, v)),
                    placeholder: "Title",
                }
                RemoveButton {
                    label: "Remove feature".to_string(),
                    onclick: move |_| on_edit.call(PanelEdit::RemoveFeature(index)),
                }
            }
            TextArea {
                value: feature.description.clone(),
                rows: 2,
                on_input: move |v| on_edit.call(PanelEdit::FeatureDescription(index, v)),
                placeholder: "Description",
            }
            IconSelect {
                value: Some(feature.icon.clone()),
                on_change: move |icon: Option<String>| {
                    on_edit.call(PanelEdit::FeatureIcon(index, icon.unwrap_or_default()))
                },
            }
        }
    }
}

// ---------------------------------------------------------------------------
// success
// ---------------------------------------------------------------------------

#[component]
fn SuccessEditor(content: SuccessPanel, on_edit: EventHandler<PanelEdit>) -> Element {
    rsx! {
        LabeledField { label: "Subheadline".to_string(),
            TextInput {
                value: content.subheadline.clone(),
                on_input: move |v| on_edit.call(PanelEdit::Subheadline(v)),
            }
        }
        p { class: "text-xs font-medium text-gray-400", "Unlocked features" }
        for (index , feature) in content.features.iter().enumerate() {
            SuccessFeatureRow { key: "{index}", index, feature: feature.clone(), on_edit }
        }
        AddButton {
            label: "Add feature".to_string(),
            onclick: move |_| on_edit.call(PanelEdit::AddSuccessFeature),
        }
    }
}

#[component]
fn SuccessFeatureRow(index: usize, feature: SuccessFeature, on_edit: EventHandler<PanelEdit>) -> Element {
    rsx! {
        EditorItem {
            div { class: "flex items-center gap-2",
                div { class: "w-36 flex-shrink-0",
                    IconSelect {
                        value: Some(feature.icon.clone()),
                        on_change: move |icon: Option<String>| {
                            on_edit.call(PanelEdit::SuccessFeatureIcon(index, icon.unwrap_or_default()))
                        },
                    }
                }
                TextInput {
                    value: feature.title.clone(),
                    on_input: move |v| on_edit.call(PanelEdit::SuccessFeatureTitle(index, v)),
                }
                RemoveButton {
                    label: "Remove feature".to_string(),
                    onclick: move |_| on_edit.call(PanelEdit::RemoveSuccessFeature(index)),
                }
            }
        }
    }
}
