//! Settings of the selected step

use super::card::EditorCard;
use crate::components::{Checkbox, ColorInput, LabeledField, Segment, SegmentedControl, TextInput};
use dioxus::prelude::*;
use modalkit_common::builder::StepPatch;
use modalkit_common::{PanelType, StepConfig};

/// Headlines, panel type, inheritance and background override
#[component]
pub fn StepEditor(
    step: StepConfig,
    /// 0-based; inheritance is unavailable on the first step
    index: usize,
    on_update: EventHandler<StepPatch>,
    on_panel_type: EventHandler<PanelType>,
    on_inherit: EventHandler<bool>,
) -> Element {
    let segments = PanelType::ALL
        .iter()
        .map(|t| Segment::new(t.label(), t.as_str()))
        .collect::<Vec<_>>();
    let inheriting = index > 0 && step.inherit_previous_panel;
    let background = step.panel_background_color.clone().unwrap_or_default();

    rsx! {
        EditorCard { title: format!("Step {}", index + 1),
            LabeledField { label: "Headline".to_string(),
                TextInput {
                    value: step.headline.clone(),
                    on_input: move |v| {
                        on_update
                            .call(StepPatch {
                                headline: Some(v),
                                ..Default::default()
                            })
                    },
                }
            }
            LabeledField { label: "Subheadline".to_string(),
                TextInput {
                    value: step.subheadline.clone(),
                    on_input: move |v| {
                        on_update
                            .call(StepPatch {
                                subheadline: Some(v),
                                ..Default::default()
                            })
                    },
                }
            }
            if index > 0 {
                Checkbox {
                    label: "Use previous step's panel".to_string(),
                    checked: step.inherit_previous_panel,
                    on_change: move |checked| on_inherit.call(checked),
                }
            }
            LabeledField { label: "Panel type".to_string(),
                SegmentedControl {
                    segments,
                    selected: step.panel_type().as_str(),
                    disabled: inheriting,
                    on_select: move |tag: &'static str| {
                        if let Some(panel_type) = PanelType::from_tag(tag) {
                            on_panel_type.call(panel_type);
                        }
                    },
                }
            }
            LabeledField { label: "Panel background (overrides global)".to_string(),
                ColorInput {
                    value: background,
                    on_input: move |v: String| {
                        let color = if v.trim().is_empty() { None } else { Some(v) };
                        on_update
                            .call(StepPatch {
                                panel_background_color: Some(color),
                                ..Default::default()
                            })
                    },
                }
            }
        }
    }
}
