//! Form body of a wizard step

use dioxus::prelude::*;
use modalkit_common::{pack_rows, FieldRow, FieldType, FormData, FormField, FormValue};

const CONTROL_CLASS: &str = "w-full rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-black/10 focus:border-gray-400";

/// Fields of one step laid out in packed rows
#[component]
pub fn FormFieldsView(
    fields: Vec<FormField>,
    /// Answers so far, used to pre-fill controls when navigating back
    values: FormData,
    on_change: EventHandler<(String, FormValue)>,
) -> Element {
    let rows = pack_rows(&fields);

    rsx! {
        div { class: "space-y-4",
            for row in rows.iter() {
                div {
                    key: "{row.key()}",
                    class: if matches!(row, FieldRow::Pair(..)) { "grid grid-cols-2 gap-4" } else { "" },
                    for field in row.fields() {
                        FieldControl {
                            key: "{field.id}",
                            field: field.clone(),
                            value: values.get(&field.id).map(|v| v.as_display().to_string()).unwrap_or_default(),
                            on_change,
                        }
                    }
                }
            }
        }
    }
}

/// Label plus the control for a single field
#[component]
fn FieldControl(
    field: FormField,
    value: String,
    on_change: EventHandler<(String, FormValue)>,
) -> Element {
    let field_type = field.field_type;
    let id = field.id.clone();
    let report = move |raw: String| on_change.call((id.clone(), FormValue::from_input(field_type, raw)));

    rsx! {
        div { class: "space-y-1.5",
            label {
                r#for: "{field.id}",
                class: "block text-sm font-medium text-gray-700",
                "{field.label}"
                if field.required {
                    span { class: "text-red-500 ml-0.5", "*" }
                }
            }
            match field_type {
                FieldType::Text | FieldType::Email => rsx! {
                    input {
                        id: "{field.id}",
                        name: "{field.id}",
                        r#type: if field_type == FieldType::Email { "email" } else { "text" },
                        class: CONTROL_CLASS,
                        required: field.required,
                        value: "{value}",
                        oninput: move |e| report(e.value()),
                    }
                },
                FieldType::Select | FieldType::MultiSelect => rsx! {
                    select {
                        id: "{field.id}",
                        name: "{field.id}",
                        class: CONTROL_CLASS,
                        required: field.required,
                        onchange: move |e| report(e.value()),
                        option { value: "", selected: value.is_empty(), "Select an option" }
                        for choice in field.options().iter() {
                            option {
                                key: "{choice}",
                                value: "{choice}",
                                selected: *choice == value,
                                "{choice}"
                            }
                        }
                    }
                },
                FieldType::Textarea => rsx! {
                    textarea {
                        id: "{field.id}",
                        name: "{field.id}",
                        class: "{CONTROL_CLASS} resize-none",
                        rows: "3",
                        required: field.required,
                        value: "{value}",
                        oninput: move |e| report(e.value()),
                    }
                },
            }
        }
    }
}
