//! Builder page layout: editors on the left, live preview on the right

use super::card::EditorCard;
use super::field_editor::FieldsEditor;
use super::panel_editor::PanelEditor;
use super::publish::PublishPanel;
use super::step_editor::StepEditor;
use super::step_tabs::StepTabs;
use super::style_editor::{BrandingEditor, StyleEditor};
use crate::components::{SignupWizard, Toast};
use crate::stores::builder::{BuilderAction, BuilderState, BuilderStateStoreExt};
use dioxus::prelude::*;

/// Full builder UI. Edits are reported through `on_action`; the caller owns
/// the store and the publish request.
#[component]
pub fn BuilderView(
    state: ReadStore<BuilderState>,
    on_action: EventHandler<BuilderAction>,
    on_publish: EventHandler<()>,
    on_copy_embed: EventHandler<String>,
    on_dismiss_toast: EventHandler<()>,
) -> Element {
    let config = state.config().read().clone();
    let active = *state.active_step().read();
    let publish = state.publish().read().clone();
    let toast = state.toast().read().clone();

    let Some(step) = config.steps.get(active).cloned() else {
        return rsx! {};
    };
    let headlines = config
        .steps
        .iter()
        .map(|s| s.headline.clone())
        .collect::<Vec<_>>();
    let inheriting = active > 0 && step.inherit_previous_panel;
    let step_count = config.steps.len();

    rsx! {
        div { class: "flex h-screen bg-gray-950 text-gray-300",
            aside { class: "w-[420px] flex-shrink-0 overflow-y-auto border-r border-gray-800 p-4 space-y-4",
                h1 { class: "text-lg font-semibold text-white", "Modal builder" }
                EditorCard { title: "Steps".to_string(),
                    StepTabs {
                        headlines,
                        active,
                        on_select: move |i| on_action.call(BuilderAction::SelectStep(i)),
                        on_add: move |_| on_action.call(BuilderAction::AddStep),
                        on_remove: move |i| on_action.call(BuilderAction::RemoveStep(i)),
                    }
                }
                StepEditor {
                    step: step.clone(),
                    index: active,
                    on_update: move |patch| on_action.call(BuilderAction::UpdateStep(patch)),
                    on_panel_type: move |t| on_action.call(BuilderAction::SetPanelType(t)),
                    on_inherit: move |inherit| on_action.call(BuilderAction::SetInheritPreviousPanel(inherit)),
                }
                if inheriting {
                    p { class: "text-sm text-gray-500 px-1",
                        "This step shows the panel of step {active}. Turn off inheritance to edit its own panel."
                    }
                } else {
                    PanelEditor {
                        panel: step.panel.clone(),
                        on_edit: move |edit| on_action.call(BuilderAction::EditPanel(edit)),
                    }
                }
                FieldsEditor {
                    fields: step.fields.clone(),
                    on_add: move |_| on_action.call(BuilderAction::AddField),
                    on_remove: move |i| on_action.call(BuilderAction::RemoveField(i)),
                    on_update: move |(i, patch)| on_action.call(BuilderAction::UpdateField(i, patch)),
                }
                BrandingEditor {
                    branding: config.branding.clone(),
                    on_update: move |patch| on_action.call(BuilderAction::UpdateBranding(patch)),
                }
                StyleEditor {
                    style: config.style.clone(),
                    on_update: move |patch| on_action.call(BuilderAction::UpdateStyle(patch)),
                }
                PublishPanel { status: publish, on_publish, on_copy: on_copy_embed }
            }
            main { class: "flex-1 flex items-center justify-center bg-gray-100 p-8 overflow-auto",
                div { class: "w-full max-w-4xl h-[640px]",
                    // Remount when the selection or step count changes so the
                    // preview restarts on the selected step
                    SignupWizard {
                        key: "{active}-{step_count}",
                        config: config.clone(),
                        start_step: active + 1,
                    }
                }
            }
            if let Some(message) = toast {
                Toast { message, on_dismiss: on_dismiss_toast }
            }
        }
    }
}
