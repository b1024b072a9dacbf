//! Form field list editor

use super::card::{EditorCard, EditorItem};
use crate::components::icons::{PlusIcon, TrashIcon};
use crate::components::{
    Button, ButtonSize, ButtonVariant, Checkbox, IconButton, LabeledField, NativeSelect, TextArea,
    TextInput,
};
use dioxus::prelude::*;
use modalkit_common::builder::{options_text, parse_options, FieldPatch};
use modalkit_common::{FieldType, FormField};

/// All fields of the selected step
#[component]
pub fn FieldsEditor(
    fields: Vec<FormField>,
    on_add: EventHandler<()>,
    on_remove: EventHandler<usize>,
    on_update: EventHandler<(usize, FieldPatch)>,
) -> Element {
    rsx! {
        EditorCard { title: "Form fields".to_string(),
            if fields.is_empty() {
                p { class: "text-sm text-gray-500", "This step has no fields." }
            }
            for (index , field) in fields.iter().enumerate() {
                FieldEditor {
                    key: "{index}",
                    field: field.clone(),
                    on_remove: move |_| on_remove.call(index),
                    on_update: move |patch| on_update.call((index, patch)),
                }
            }
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Small,
                onclick: move |_| on_add.call(()),
                PlusIcon { class: "w-3.5 h-3.5" }
                "Add field"
            }
        }
    }
}

#[component]
fn FieldEditor(
    field: FormField,
    on_remove: EventHandler<()>,
    on_update: EventHandler<FieldPatch>,
) -> Element {
    let type_options = FieldType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect::<Vec<_>>();

    // Blank lines are dropped from the stored options, so keep the raw text
    // locally while it still describes the same list.
    let mut options_draft = use_signal(|| options_text(field.options()));
    let options_value = if parse_options(&options_draft.read()) == field.options() {
        options_draft.read().clone()
    } else {
        options_text(field.options())
    };

    rsx! {
        EditorItem {
            div { class: "flex items-center gap-2",
                div { class: "flex-1",
                    TextInput {
                        value: field.label.clone(),
                        placeholder: "Label",
                        on_input: move |v| {
                            on_update
                                .call(FieldPatch {
                                    label: Some(v),
                                    ..Default::default()
                                })
                        },
                    }
                }
                IconButton {
                    label: "Remove field".to_string(),
                    danger: true,
                    onclick: move |_| on_remove.call(()),
                    TrashIcon { class: "w-3.5 h-3.5" }
                }
            }
            div { class: "grid grid-cols-2 gap-2",
                LabeledField { label: "Field ID".to_string(),
                    TextInput {
                        value: field.id.clone(),
                        monospace: true,
                        on_input: move |v| {
                            on_update
                                .call(FieldPatch {
                                    id: Some(v),
                                    ..Default::default()
                                })
                        },
                    }
                }
                LabeledField { label: "Type".to_string(),
                    NativeSelect {
                        value: field.field_type.as_str().to_string(),
                        options: type_options,
                        on_change: move |tag: String| {
                            if let Some(field_type) = FieldType::from_tag(&tag) {
                                on_update
                                    .call(FieldPatch {
                                        field_type: Some(field_type),
                                        ..Default::default()
                                    })
                            }
                        },
                    }
                }
            }
            div { class: "flex items-center gap-4",
                Checkbox {
                    label: "Required".to_string(),
                    checked: field.required,
                    on_change: move |required| {
                        on_update
                            .call(FieldPatch {
                                required: Some(required),
                                ..Default::default()
                            })
                    },
                }
                Checkbox {
                    label: "Full width".to_string(),
                    checked: field.full_width,
                    on_change: move |full_width| {
                        on_update
                            .call(FieldPatch {
                                full_width: Some(full_width),
                                ..Default::default()
                            })
                    },
                }
            }
            if field.field_type.has_options() {
                LabeledField { label: "Options (one per line)".to_string(),
                    TextArea {
                        value: options_value,
                        rows: 4,
                        on_input: move |text: String| {
                            options_draft.set(text.clone());
                            on_update
                                .call(FieldPatch {
                                    options: Some(parse_options(&text)),
                                    ..Default::default()
                                })
                        },
                    }
                }
            }
        }
    }
}
