//! Row packing for form fields
//!
//! Full-width fields get a row to themselves. Half-width fields pair up in
//! order; an unpaired one is flushed alone when a full-width field or the
//! end of the list is reached. Order is always preserved.

use crate::config::FormField;

/// One visual row of the form
#[derive(Clone, Debug, PartialEq)]
pub enum FieldRow<'a> {
    /// A full-width field, or a half-width field left without a partner
    Single(&'a FormField),
    /// Two half-width fields side by side
    Pair(&'a FormField, &'a FormField),
}

impl<'a> FieldRow<'a> {
    pub fn fields(&self) -> Vec<&'a FormField> {
        match *self {
            FieldRow::Single(f) => vec![f],
            FieldRow::Pair(a, b) => vec![a, b],
        }
    }

    /// Stable key for rendering
    pub fn key(&self) -> String {
        match self {
            FieldRow::Single(f) => f.id.clone(),
            FieldRow::Pair(a, b) => format!("{}+{}", a.id, b.id),
        }
    }
}

/// Group fields into rows
pub fn pack_rows(fields: &[FormField]) -> Vec<FieldRow<'_>> {
    let mut rows = Vec::with_capacity(fields.len());
    let mut pending: Option<&FormField> = None;

    for field in fields {
        if field.full_width {
            if let Some(buffered) = pending.take() {
                rows.push(FieldRow::Single(buffered));
            }
            rows.push(FieldRow::Single(field));
        } else if let Some(buffered) = pending.take() {
            rows.push(FieldRow::Pair(buffered, field));
        } else {
            pending = Some(field);
        }
    }

    if let Some(buffered) = pending {
        rows.push(FieldRow::Single(buffered));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldType;

    fn field(id: &str, full_width: bool) -> FormField {
        FormField {
            id: id.to_string(),
            label: id.to_uppercase(),
            field_type: FieldType::Text,
            required: false,
            full_width,
            options: None,
        }
    }

    fn ids(rows: &[FieldRow<'_>]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.fields().iter().map(|f| f.id.clone()).collect())
            .collect()
    }

    #[test]
    fn pairs_half_width_and_isolates_full_width() {
        let fields = vec![
            field("a", false),
            field("b", false),
            field("c", true),
            field("d", false),
        ];
        assert_eq!(ids(&pack_rows(&fields)), vec![vec!["a", "b"], vec!["c"], vec!["d"]]);
    }

    #[test]
    fn full_width_flushes_pending_half() {
        let fields = vec![field("a", false), field("b", true), field("c", false), field("d", false)];
        assert_eq!(ids(&pack_rows(&fields)), vec![vec!["a"], vec!["b"], vec!["c", "d"]]);
    }

    #[test]
    fn pairing_is_greedy_in_order() {
        let fields: Vec<_> = ["a", "b", "c", "d", "e"].iter().map(|id| field(id, false)).collect();
        assert_eq!(
            ids(&pack_rows(&fields)),
            vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]
        );
    }

    #[test]
    fn email_then_name_pair() {
        // The usual first step: full-width email, then first/last name side by side
        let fields = vec![field("email", true), field("firstName", false), field("lastName", false)];
        let rows = pack_rows(&fields);
        assert_eq!(rows.len(), 2);
        assert!(matches!(rows[0], FieldRow::Single(f) if f.id == "email"));
        assert!(matches!(rows[1], FieldRow::Pair(a, b) if a.id == "firstName" && b.id == "lastName"));
        assert_eq!(rows[1].key(), "firstName+lastName");
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(pack_rows(&[]).is_empty());
    }

    #[test]
    fn packing_is_repeatable() {
        let fields = vec![
            field("a", true),
            field("b", false),
            field("c", false),
            field("d", false),
            field("e", true),
        ];
        let first = ids(&pack_rows(&fields));
        let second = ids(&pack_rows(&fields));
        assert_eq!(first, second);
        assert_eq!(first, vec![vec!["a"], vec!["b", "c"], vec!["d"], vec!["e"]]);
    }
}
