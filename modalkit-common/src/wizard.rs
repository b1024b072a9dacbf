//! Step navigation state machine
//!
//! Pure data structure that tracks the current step and the collected
//! answers. The view layer turns [`Transition`]s into effects (animations,
//! the submit callback).

use crate::config::StepConfig;
use crate::form::{FormData, FormValue};

/// Direction of the most recent step change. Only drives animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Outcome of pressing Continue
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// Moved to the given 1-based step
    Advanced(usize),
    /// Already on the last step; the caller should submit these answers
    Submitted(FormData),
}

/// Wizard state for one open modal
#[derive(Clone, Debug, PartialEq)]
pub struct WizardState {
    step: usize,
    total_steps: usize,
    form_data: FormData,
    direction: Direction,
}

impl WizardState {
    pub fn new(total_steps: usize) -> Self {
        Self::starting_at(total_steps, 1)
    }

    /// Open on a specific 1-based step (builder preview). Out-of-range values
    /// are clamped.
    pub fn starting_at(total_steps: usize, step: usize) -> Self {
        let total_steps = total_steps.max(1);
        Self {
            step: step.clamp(1, total_steps),
            total_steps,
            form_data: FormData::new(),
            direction: Direction::Forward,
        }
    }

    /// Current step, 1-based
    pub fn step(&self) -> usize {
        self.step
    }

    /// Current step, 0-based
    pub fn step_index(&self) -> usize {
        self.step - 1
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn value(&self, field_id: &str) -> Option<&FormValue> {
        self.form_data.get(field_id)
    }

    /// Record an answer, overwriting any previous value for the field
    pub fn set_value(&mut self, field_id: impl Into<String>, value: FormValue) {
        self.form_data.insert(field_id.into(), value);
    }

    /// Merge a batch of answers (new keys added, existing keys overwritten)
    pub fn merge(&mut self, values: FormData) {
        self.form_data.extend(values);
    }

    pub fn is_last_step(&self) -> bool {
        self.step >= self.total_steps
    }

    pub fn can_go_back(&self) -> bool {
        self.step > 1
    }

    /// Continue: move forward, or hand back the answers on the last step
    pub fn advance(&mut self) -> Transition {
        if self.is_last_step() {
            return Transition::Submitted(self.form_data.clone());
        }
        self.step += 1;
        self.direction = Direction::Forward;
        Transition::Advanced(self.step)
    }

    /// Continue with the values submitted by the current step's form
    pub fn advance_with(&mut self, submitted: FormData) -> Transition {
        self.merge(submitted);
        self.advance()
    }

    /// Back: no-op on the first step. Answers are kept.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.step -= 1;
        self.direction = Direction::Backward;
        true
    }

    /// Progress bar fill, 0-100
    pub fn progress_percent(&self) -> f64 {
        self.step as f64 / self.total_steps as f64 * 100.0
    }

    pub fn continue_label(&self) -> &'static str {
        if self.is_last_step() {
            "Submit"
        } else {
            "Continue"
        }
    }
}

/// Effective step at `index` after applying panel inheritance.
///
/// An inheriting step takes the panel and (unless it sets its own)
/// background of the raw step before it. Its headlines and fields are
/// always its own.
pub fn resolve_step(steps: &[StepConfig], index: usize) -> Option<StepConfig> {
    let current = steps.get(index)?;
    if !current.inherit_previous_panel || index == 0 {
        return Some(current.clone());
    }
    let previous = &steps[index - 1];
    Some(StepConfig {
        headline: current.headline.clone(),
        subheadline: current.subheadline.clone(),
        panel: previous.panel.clone(),
        fields: current.fields.clone(),
        inherit_previous_panel: current.inherit_previous_panel,
        panel_background_color: current
            .panel_background_color
            .clone()
            .or_else(|| previous.panel_background_color.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        FieldType, FormField, MainPanel, PanelContent, PanelType, ValueProp,
    };

    fn text(s: &str) -> FormValue {
        FormValue::Text(s.to_string())
    }

    fn field(id: &str) -> FormField {
        FormField {
            id: id.to_string(),
            label: id.to_string(),
            field_type: FieldType::Text,
            required: true,
            full_width: true,
            options: None,
        }
    }

    fn main_panel(headline: &str) -> PanelContent {
        PanelContent::Main(MainPanel {
            headline: headline.to_string(),
            value_props: vec![ValueProp {
                icon: "Layers".into(),
                text: "Fine-tune".into(),
            }],
            ..Default::default()
        })
    }

    fn step(panel: PanelContent, fields: Vec<FormField>) -> StepConfig {
        StepConfig {
            headline: "h".into(),
            subheadline: "s".into(),
            panel,
            fields,
            inherit_previous_panel: false,
            panel_background_color: None,
        }
    }

    #[test]
    fn back_on_first_step_is_noop() {
        let mut w = WizardState::new(3);
        assert!(!w.back());
        assert_eq!(w.step(), 1);
        assert_eq!(w.direction(), Direction::Forward);
    }

    #[test]
    fn continue_advances_then_submits_without_overflow() {
        let mut w = WizardState::new(2);
        assert_eq!(w.continue_label(), "Continue");
        assert_eq!(w.advance(), Transition::Advanced(2));
        assert!(w.is_last_step());
        assert_eq!(w.continue_label(), "Submit");

        w.set_value("email", text("a@b.co"));
        let first = w.advance();
        let second = w.advance();
        assert_eq!(w.step(), 2);
        match (first, second) {
            (Transition::Submitted(a), Transition::Submitted(b)) => {
                assert_eq!(a, b);
                assert_eq!(a.get("email"), Some(&text("a@b.co")));
            }
            other => panic!("expected two submissions, got {other:?}"),
        }
    }

    #[test]
    fn answers_survive_back_and_forward() {
        let mut w = WizardState::new(3);
        w.set_value("email", text("jane@example.com"));
        w.advance();
        w.set_value("company", text("Acme"));
        assert!(w.back());
        assert_eq!(w.direction(), Direction::Backward);
        assert_eq!(w.value("email"), Some(&text("jane@example.com")));
        w.advance();
        assert_eq!(w.direction(), Direction::Forward);
        assert_eq!(w.value("company"), Some(&text("Acme")));
    }

    #[test]
    fn advance_with_merges_and_overwrites() {
        let mut w = WizardState::new(3);
        w.set_value("email", text("old@example.com"));
        let mut submitted = FormData::new();
        submitted.insert("email".into(), text("new@example.com"));
        submitted.insert("firstName".into(), text("Jane"));
        assert_eq!(w.advance_with(submitted), Transition::Advanced(2));
        assert_eq!(w.form_data().len(), 2);
        assert_eq!(w.value("email"), Some(&text("new@example.com")));
    }

    #[test]
    fn start_step_is_clamped() {
        assert_eq!(WizardState::starting_at(4, 3).step(), 3);
        assert_eq!(WizardState::starting_at(4, 0).step(), 1);
        assert_eq!(WizardState::starting_at(4, 9).step(), 4);
        assert_eq!(WizardState::new(0).total_steps(), 1);
    }

    #[test]
    fn progress_tracks_step() {
        let mut w = WizardState::new(4);
        assert_eq!(w.progress_percent(), 25.0);
        w.advance();
        assert_eq!(w.progress_percent(), 50.0);
        let single = WizardState::new(1);
        assert_eq!(single.progress_percent(), 100.0);
        assert_eq!(single.continue_label(), "Submit");
    }

    #[test]
    fn inherit_takes_previous_panel_and_own_fields() {
        let mut second = step(PanelContent::skeleton(PanelType::Success), vec![field("f1")]);
        second.inherit_previous_panel = true;
        let steps = vec![step(main_panel("X"), vec![field("email")]), second];

        let resolved = resolve_step(&steps, 1).unwrap();
        assert_eq!(resolved.panel_type(), PanelType::Main);
        assert_eq!(resolved.panel, main_panel("X"));
        assert_eq!(resolved.fields, vec![field("f1")]);
        assert_eq!(resolved.panel_background_color, None);
    }

    #[test]
    fn inherit_background_prefers_own_override() {
        let mut first = step(main_panel("X"), vec![]);
        first.panel_background_color = Some("#000".into());
        let mut second = step(main_panel("ignored"), vec![]);
        second.inherit_previous_panel = true;

        let mut steps = vec![first, second];
        assert_eq!(
            resolve_step(&steps, 1).unwrap().panel_background_color.as_deref(),
            Some("#000")
        );

        steps[1].panel_background_color = Some("#111".into());
        assert_eq!(
            resolve_step(&steps, 1).unwrap().panel_background_color.as_deref(),
            Some("#111")
        );
    }

    #[test]
    fn inherit_ignored_on_first_step() {
        let mut first = step(main_panel("own"), vec![]);
        first.inherit_previous_panel = true;
        let steps = vec![first.clone()];
        assert_eq!(resolve_step(&steps, 0), Some(first));
        assert_eq!(resolve_step(&steps, 1), None);
    }

    #[test]
    fn non_inheriting_step_is_unchanged() {
        let steps = vec![
            step(main_panel("a"), vec![]),
            step(PanelContent::skeleton(PanelType::Features), vec![field("x")]),
        ];
        assert_eq!(resolve_step(&steps, 1).as_ref(), Some(&steps[1]));
    }
}
