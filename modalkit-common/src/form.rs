//! Answers collected while the wizard is open

use crate::config::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field id -> entered value
pub type FormData = BTreeMap<String, FormValue>;

/// A single answer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    /// Stored by multi-select fields
    List(Vec<String>),
}

impl FormValue {
    /// Value stored when a control of `field_type` reports `raw`.
    ///
    /// Multi-select is rendered as a single-choice control and wraps the
    /// chosen option in a one-element list.
    pub fn from_input(field_type: FieldType, raw: String) -> Self {
        match field_type {
            FieldType::MultiSelect => FormValue::List(vec![raw]),
            FieldType::Text | FieldType::Email | FieldType::Select | FieldType::Textarea => {
                FormValue::Text(raw)
            }
        }
    }

    /// Value shown by a single-choice control.
    ///
    /// Multi-select fields hold a one-element list, so the first entry is
    /// what the control displays.
    pub fn as_display(&self) -> &str {
        match self {
            FormValue::Text(s) => s,
            FormValue::List(items) => items.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FormValue::Text(s) => s.is_empty(),
            FormValue::List(items) => items.iter().all(String::is_empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_wire_shape() {
        let mut data = FormData::new();
        data.insert("email".into(), FormValue::Text("a@b.co".into()));
        data.insert("models".into(), FormValue::List(vec!["GPT-4".into()]));

        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"email":"a@b.co","models":["GPT-4"]}"#);
    }

    #[test]
    fn multi_select_stores_one_element_list() {
        assert_eq!(
            FormValue::from_input(FieldType::MultiSelect, "Lower cost".into()),
            FormValue::List(vec!["Lower cost".into()])
        );
        assert_eq!(
            FormValue::from_input(FieldType::Select, "GPT-4".into()),
            FormValue::Text("GPT-4".into())
        );
        assert_eq!(
            FormValue::from_input(FieldType::Email, "a@b.co".into()),
            FormValue::Text("a@b.co".into())
        );
    }

    #[test]
    fn display_of_list_is_first_entry() {
        assert_eq!(FormValue::List(vec![]).as_display(), "");
        assert_eq!(
            FormValue::List(vec!["Claude".into(), "Other".into()]).as_display(),
            "Claude"
        );
        assert!(FormValue::Text(String::new()).is_empty());
        assert!(!FormValue::List(vec!["x".into()]).is_empty());
    }
}
