//! Structural checks on a [`ModalConfig`] before it is published.
//!
//! Rendering never calls this; the wizard tolerates anything it can parse.

use crate::config::ModalConfig;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config has no steps")]
    NoSteps,
    #[error("step {step}: duplicate field id '{field_id}'")]
    DuplicateFieldId { step: usize, field_id: String },
    #[error("step {step}: field '{field_id}' needs at least one option")]
    MissingOptions { step: usize, field_id: String },
    #[error("step {step}: field id must not be empty")]
    EmptyFieldId { step: usize },
}

impl ModalConfig {
    /// Every invariant violation, with 1-based step numbers
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.steps.is_empty() {
            errors.push(ConfigError::NoSteps);
        }

        for (index, step) in self.steps.iter().enumerate() {
            let number = index + 1;
            let mut seen = HashSet::new();
            for field in &step.fields {
                if field.id.is_empty() {
                    errors.push(ConfigError::EmptyFieldId { step: number });
                    continue;
                }
                if !seen.insert(field.id.as_str()) {
                    errors.push(ConfigError::DuplicateFieldId {
                        step: number,
                        field_id: field.id.clone(),
                    });
                }
                if field.field_type.has_options() && field.options().is_empty() {
                    errors.push(ConfigError::MissingOptions {
                        step: number,
                        field_id: field.id.clone(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldType, FormField, StepConfig};

    fn field(id: &str, field_type: FieldType, options: Option<Vec<&str>>) -> FormField {
        FormField {
            id: id.to_string(),
            label: String::new(),
            field_type,
            required: false,
            full_width: true,
            options: options.map(|o| o.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn empty_config_has_no_steps() {
        assert_eq!(ModalConfig::default().validate(), Err(vec![ConfigError::NoSteps]));
    }

    #[test]
    fn starter_config_is_valid() {
        assert_eq!(ModalConfig::starter().validate(), Ok(()));
    }

    #[test]
    fn reports_duplicates_and_missing_options() {
        let mut step = StepConfig::new_blank();
        step.fields = vec![
            field("email", FieldType::Email, None),
            field("email", FieldType::Text, None),
            field("models", FieldType::MultiSelect, Some(vec![])),
            field("plan", FieldType::Select, None),
            field("ok", FieldType::Select, Some(vec!["A"])),
        ];
        let config = ModalConfig {
            steps: vec![StepConfig::new_blank(), step],
            ..Default::default()
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ConfigError::DuplicateFieldId {
                    step: 2,
                    field_id: "email".into()
                },
                ConfigError::MissingOptions {
                    step: 2,
                    field_id: "models".into()
                },
                ConfigError::MissingOptions {
                    step: 2,
                    field_id: "plan".into()
                },
            ]
        );
        assert_eq!(errors[0].to_string(), "step 2: duplicate field id 'email'");
    }

    #[test]
    fn same_id_in_different_steps_is_fine() {
        let mut a = StepConfig::new_blank();
        a.fields = vec![field("name", FieldType::Text, None)];
        let b = a.clone();
        let config = ModalConfig {
            steps: vec![a, b],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
