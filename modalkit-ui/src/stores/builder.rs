//! Builder state store

use dioxus::prelude::*;
use modalkit_common::builder::{BrandingPatch, FieldPatch, PanelEdit, StepPatch, StylePatch};
use modalkit_common::{ModalConfig, PanelType};
use tracing::debug;

/// State of the publish flow
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PublishStatus {
    #[default]
    Idle,
    Publishing,
    Published { id: String, embed_url: String },
}

/// Transient notification shown over the builder
#[derive(Clone, Debug, PartialEq)]
pub enum ToastMessage {
    Success(String),
    Error(String),
}

/// Everything the builder page renders
#[derive(Clone, Debug, PartialEq, Store)]
pub struct BuilderState {
    /// The config being authored
    pub config: ModalConfig,
    /// Step selected in the editor, 0-based. The preview opens on it.
    pub active_step: usize,
    pub publish: PublishStatus,
    pub toast: Option<ToastMessage>,
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::with_config(ModalConfig::starter())
    }
}

/// An edit made in one of the builder views
#[derive(Clone, Debug, PartialEq)]
pub enum BuilderAction {
    SelectStep(usize),
    AddStep,
    RemoveStep(usize),
    UpdateStep(StepPatch),
    SetPanelType(PanelType),
    SetInheritPreviousPanel(bool),
    EditPanel(PanelEdit),
    AddField,
    RemoveField(usize),
    UpdateField(usize, FieldPatch),
    UpdateStyle(StylePatch),
    UpdateBranding(BrandingPatch),
}

impl BuilderState {
    pub fn with_config(config: ModalConfig) -> Self {
        Self {
            config,
            active_step: 0,
            publish: PublishStatus::Idle,
            toast: None,
        }
    }

    /// 1-based step the preview wizard should open on
    pub fn preview_step(&self) -> usize {
        self.active_step + 1
    }

    /// Apply an edit. Step-scoped edits target the active step.
    pub fn dispatch(&mut self, action: BuilderAction) {
        debug!("Builder action: {:?}", action);
        let step = self.active_step;
        match action {
            BuilderAction::SelectStep(index) => {
                if index < self.config.steps.len() {
                    self.active_step = index;
                }
            }
            BuilderAction::AddStep => {
                self.active_step = self.config.add_step();
            }
            BuilderAction::RemoveStep(index) => {
                if self.config.remove_step(index) && (index < step || step >= self.config.steps.len()) {
                    self.active_step = step.saturating_sub(1);
                }
            }
            BuilderAction::UpdateStep(patch) => self.config.update_step(step, patch),
            BuilderAction::SetPanelType(panel_type) => self.config.set_panel_type(step, panel_type),
            BuilderAction::SetInheritPreviousPanel(inherit) => {
                self.config.set_inherit_previous_panel(step, inherit)
            }
            BuilderAction::EditPanel(edit) => self.config.edit_panel(step, edit),
            BuilderAction::AddField => {
                self.config.add_field(step);
            }
            BuilderAction::RemoveField(index) => {
                self.config.remove_field(step, index);
            }
            BuilderAction::UpdateField(index, patch) => self.config.update_field(step, index, patch),
            BuilderAction::UpdateStyle(patch) => self.config.update_style(patch),
            BuilderAction::UpdateBranding(patch) => self.config.update_branding(patch),
        }
    }

    pub fn publish_started(&mut self) {
        self.publish = PublishStatus::Publishing;
    }

    pub fn publish_succeeded(&mut self, id: String, embed_url: String) {
        self.publish = PublishStatus::Published { id, embed_url };
        self.toast = Some(ToastMessage::Success("Modal published".to_string()));
    }

    /// A failed publish leaves the config and any earlier embed URL alone
    pub fn publish_failed(&mut self, previous: PublishStatus) {
        self.publish = previous;
        self.toast = Some(ToastMessage::Error("Failed to save".to_string()));
    }

    pub fn embed_url(&self) -> Option<&str> {
        match &self.publish {
            PublishStatus::Published { embed_url, .. } => Some(embed_url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_starter_config() {
        let state = BuilderState::default();
        assert_eq!(state.config, ModalConfig::starter());
        assert_eq!(state.preview_step(), 1);
    }

    #[test]
    fn adding_a_step_selects_it() {
        let mut state = BuilderState::default();
        let before = state.config.steps.len();
        state.dispatch(BuilderAction::AddStep);
        assert_eq!(state.config.steps.len(), before + 1);
        assert_eq!(state.active_step, before);
        assert_eq!(state.config.steps[before].headline, "New Step");
    }

    #[test]
    fn removing_steps_keeps_selection_in_range() {
        let mut state = BuilderState::default();
        state.dispatch(BuilderAction::SelectStep(4));
        state.dispatch(BuilderAction::RemoveStep(4));
        assert_eq!(state.active_step, 3);

        state.dispatch(BuilderAction::SelectStep(2));
        state.dispatch(BuilderAction::RemoveStep(0));
        assert_eq!(state.active_step, 1);
        assert_eq!(state.config.steps[1].headline, "About how many LLM calls does your project make per day?");

        state.dispatch(BuilderAction::RemoveStep(2));
        assert_eq!(state.active_step, 1);
    }

    #[test]
    fn last_step_survives_removal() {
        let mut state = BuilderState::default();
        for _ in 0..10 {
            state.dispatch(BuilderAction::RemoveStep(0));
        }
        assert_eq!(state.config.steps.len(), 1);
        assert_eq!(state.active_step, 0);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut state = BuilderState::default();
        state.dispatch(BuilderAction::SelectStep(2));
        state.dispatch(BuilderAction::SelectStep(99));
        assert_eq!(state.active_step, 2);
    }

    #[test]
    fn edits_target_active_step() {
        let mut state = BuilderState::default();
        state.dispatch(BuilderAction::SelectStep(1));
        state.dispatch(BuilderAction::SetPanelType(PanelType::Success));
        state.dispatch(BuilderAction::AddField);

        assert_eq!(state.config.steps[0].panel_type(), PanelType::Main);
        assert_eq!(state.config.steps[1].panel_type(), PanelType::Success);
        assert_eq!(state.config.steps[1].fields.len(), 2);
    }

    #[test]
    fn failed_publish_keeps_config_and_previous_url() {
        let mut state = BuilderState::default();
        state.publish_started();
        state.publish_succeeded("abc".into(), "http://localhost:8080/embed/abc".into());
        let config = state.config.clone();

        let previous = state.publish.clone();
        state.publish_started();
        state.publish_failed(previous);

        assert_eq!(state.config, config);
        assert_eq!(state.embed_url(), Some("http://localhost:8080/embed/abc"));
        assert_eq!(state.toast, Some(ToastMessage::Error("Failed to save".into())));
    }
}
