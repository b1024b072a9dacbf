//! Global style and branding

use super::card::EditorCard;
use super::image_input::ImageInput;
use crate::components::{ColorInput, LabeledField, NativeSelect, TextInput};
use dioxus::prelude::*;
use modalkit_common::builder::{BrandingPatch, StylePatch};
use modalkit_common::panel::FONT_OPTIONS;
use modalkit_common::{Branding, ModalStyle};

#[component]
pub fn BrandingEditor(branding: Branding, on_update: EventHandler<BrandingPatch>) -> Element {
    rsx! {
        EditorCard { title: "Branding".to_string(),
            LabeledField { label: "Company name".to_string(),
                TextInput {
                    value: branding.company_name.clone(),
                    on_input: move |v| {
                        on_update
                            .call(BrandingPatch {
                                company_name: Some(v),
                                ..Default::default()
                            })
                    },
                }
            }
            LabeledField { label: "Logo".to_string(),
                ImageInput {
                    value: branding.logo.clone().unwrap_or_default(),
                    on_change: move |v| {
                        on_update
                            .call(BrandingPatch {
                                logo: Some(Some(v)),
                                ..Default::default()
                            })
                    },
                }
            }
        }
    }
}

/// Which style value a color row edits
#[derive(Clone, Copy, PartialEq)]
enum ColorSlot {
    Primary,
    Secondary,
    Text,
    LeftPanel,
    RightPanel,
}

impl ColorSlot {
    fn patch(self, value: String) -> StylePatch {
        let mut patch = StylePatch::default();
        let slot = match self {
            ColorSlot::Primary => &mut patch.primary_color,
            ColorSlot::Secondary => &mut patch.secondary_color,
            ColorSlot::Text => &mut patch.text_color,
            ColorSlot::LeftPanel => &mut patch.left_panel_color,
            ColorSlot::RightPanel => &mut patch.right_panel_main_color,
        };
        *slot = Some(value);
        patch
    }
}

#[component]
pub fn StyleEditor(style: ModalStyle, on_update: EventHandler<StylePatch>) -> Element {
    let fonts = FONT_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect::<Vec<_>>();
    let colors = [
        ("Primary color", ColorSlot::Primary, style.primary_color.clone()),
        ("Secondary color", ColorSlot::Secondary, style.secondary_color.clone()),
        ("Text color", ColorSlot::Text, style.text_color.clone()),
        ("Left panel color", ColorSlot::LeftPanel, style.left_panel_color.clone()),
        ("Right panel color", ColorSlot::RightPanel, style.right_panel_main_color.clone()),
    ];

    rsx! {
        EditorCard { title: "Style".to_string(),
            LabeledField { label: "Font".to_string(),
                NativeSelect {
                    value: style.font_family.clone().unwrap_or_else(|| "system".to_string()),
                    options: fonts,
                    on_change: move |v| {
                        on_update
                            .call(StylePatch {
                                font_family: Some(v),
                                ..Default::default()
                            })
                    },
                }
            }
            for (label , slot , value) in colors {
                LabeledField { key: "{label}", label: label.to_string(),
                    ColorInput {
                        value: value.unwrap_or_default(),
                        on_input: move |v| on_update.call(slot.patch(v)),
                    }
                }
            }
            LabeledField { label: "Left panel padding".to_string(),
                TextInput {
                    value: style.left_panel_padding.clone().unwrap_or_default(),
                    placeholder: "40px",
                    on_input: move |v| {
                        on_update
                            .call(StylePatch {
                                left_panel_padding: Some(v),
                                ..Default::default()
                            })
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_slots_patch_their_own_value() {
        let patch = ColorSlot::LeftPanel.patch("#000".to_string());
        assert_eq!(patch.left_panel_color.as_deref(), Some("#000"));
        assert_eq!(patch.primary_color, None);

        let mut style = ModalStyle::default();
        style.apply(ColorSlot::Primary.patch("#123456".to_string()));
        style.apply(ColorSlot::Primary.patch(String::new()));
        assert_eq!(style.primary_color, None);
    }
}
