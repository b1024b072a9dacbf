//! The signup modal: left panel, branding, progress bar and step form

use super::form_fields::FormFieldsView;
use super::left_panel::LeftPanel;
use crate::components::icons::ArrowLeftIcon;
use crate::components::ChromelessButton;
use crate::wasm_utils::BodyWidthObserver;
use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use modalkit_common::panel::{
    font_stack, is_mobile_width, left_panel_visible, panel_background, DEFAULT_PRIMARY_COLOR,
};
use modalkit_common::{
    resolve_step, Branding, Direction, FormData, ModalConfig, Transition, WizardState,
};
use tracing::info;

/// Entrance animation classes for (left panel, right panel).
///
/// The left panel moves vertically and the form horizontally; going back
/// mirrors going forward.
fn animation_classes(direction: Direction) -> (&'static str, &'static str) {
    match direction {
        Direction::Forward => ("modalkit-enter-from-below", "modalkit-enter-from-right"),
        Direction::Backward => ("modalkit-enter-from-above", "modalkit-enter-from-left"),
    }
}

/// Multi-step signup modal driven by a [`ModalConfig`]
#[component]
pub fn SignupWizard(
    config: ModalConfig,
    /// 1-based step to open on; clamped into range
    #[props(default = 1)]
    start_step: usize,
    /// Receives the collected answers when the last step is submitted.
    /// Without a handler the answers are logged.
    #[props(default)]
    on_submit: Option<EventHandler<FormData>>,
) -> Element {
    let total_steps = config.steps.len();
    let mut wizard = use_signal(|| WizardState::starting_at(total_steps, start_step));
    let mut body_width = use_signal(|| f64::INFINITY);
    let mut width_observer: Signal<Option<BodyWidthObserver>> = use_signal(|| None);

    // Observe after the first render; the observer callback runs outside the
    // Dioxus runtime, so restore it before touching signals.
    use_effect(move || {
        let runtime = Runtime::current();
        let observer = BodyWidthObserver::new(move |width| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let changed = body_width
                .try_peek()
                .map(|current| (*current - width).abs() > 0.5)
                .unwrap_or(false);
            if changed {
                if let Ok(mut guard) = body_width.try_write() {
                    *guard = width;
                }
            }
        });
        width_observer.set(observer);
    });

    use_drop(move || {
        // Disconnect outside the teardown diff
        if let Some(observer) = width_observer.write().take() {
            spawn(async move {
                drop(observer);
            });
        }
    });

    let state = wizard.read().clone();
    let Some(step) = resolve_step(&config.steps, state.step_index()) else {
        return rsx! {};
    };

    let style = config.style.clone();
    let is_mobile = is_mobile_width(body_width());
    let show_left_panel = left_panel_visible(body_width(), state.step());
    let (left_animation, right_animation) = animation_classes(state.direction());

    let background = panel_background(&step, &style);
    let primary = style
        .primary_color
        .clone()
        .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string());
    let right_background = style
        .right_panel_main_color
        .clone()
        .unwrap_or_else(|| "#FFFFFF".to_string());
    let text_color = style
        .text_color
        .clone()
        .unwrap_or_else(|| "#111827".to_string());
    let font = font_stack(style.font_family.as_deref());
    let progress = state.progress_percent();
    let step_number = state.step();
    let continue_label = state.continue_label();
    let layout = if is_mobile { "flex-col" } else { "flex-row" };

    rsx! {
        div {
            class: "modalkit-root w-full h-full min-h-[600px] flex overflow-hidden rounded-2xl shadow-2xl {layout}",
            style: "font-family: {font};",
            if show_left_panel {
                div { class: if is_mobile { "w-full" } else { "w-1/2 flex-shrink-0" },
                    LeftPanel {
                        key: "{step_number}",
                        panel: step.panel.clone(),
                        background,
                        padding: style.left_panel_padding.clone(),
                        animation: left_animation,
                    }
                }
            }
            div {
                class: "flex-1 flex flex-col px-8 py-8 md:px-12",
                style: "background-color: {right_background}; color: {text_color};",
                BrandingHeader { branding: config.branding.clone() }
                div { class: "h-1 w-full rounded-full bg-gray-100 mb-10 overflow-hidden",
                    div {
                        class: "h-full rounded-full transition-all duration-500",
                        role: "progressbar",
                        aria_valuenow: "{progress}",
                        style: "width: {progress}%; background-color: {primary};",
                    }
                }
                div { key: "{step_number}", class: "flex-1 flex flex-col {right_animation}",
                    h1 { class: "text-2xl font-semibold mb-2", "{step.headline}" }
                    if !step.subheadline.is_empty() {
                        p { class: "text-gray-500 mb-8", "{step.subheadline}" }
                    }
                    form {
                        class: "flex-1 flex flex-col",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            let transition = wizard.write().advance();
                            if let Transition::Submitted(answers) = transition {
                                match on_submit {
                                    Some(handler) => handler.call(answers),
                                    None => {
                                        info!(
                                            "Signup submitted: {}",
                                            serde_json::to_string(&answers).unwrap_or_default()
                                        )
                                    }
                                }
                            }
                        },
                        FormFieldsView {
                            fields: step.fields.clone(),
                            values: state.form_data().clone(),
                            on_change: move |(id, value)| wizard.write().set_value(id, value),
                        }
                        div { class: "mt-auto pt-8 flex items-center justify-between",
                            if state.can_go_back() {
                                ChromelessButton {
                                    class: Some("inline-flex items-center gap-1 text-sm text-gray-500 hover:text-gray-900".to_string()),
                                    onclick: move |_| {
                                        wizard.write().back();
                                    },
                                    ArrowLeftIcon { class: "w-4 h-4" }
                                    "Back"
                                }
                            } else {
                                span {}
                            }
                            ChromelessButton {
                                r#type: Some("submit"),
                                class: Some("px-6 py-2.5 rounded-lg text-white font-medium hover:opacity-90 transition-opacity".to_string()),
                                style: Some(format!("background-color: {primary};")),
                                onclick: |_| {},
                                "{continue_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Company logo, or the company name when there is no logo
#[component]
fn BrandingHeader(branding: Branding) -> Element {
    let name = branding.display_name().to_string();

    rsx! {
        div { class: "flex items-center mb-6 h-8",
            match branding.logo.as_deref().filter(|l| !l.is_empty()) {
                Some(logo) => rsx! {
                    img {
                        class: "h-8 w-auto object-contain",
                        src: "{logo}",
                        alt: "{name}",
                    }
                },
                None => rsx! {
                    span { class: "text-lg font-semibold", "{name}" }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backward_mirrors_forward() {
        let (fwd_left, fwd_right) = animation_classes(Direction::Forward);
        let (back_left, back_right) = animation_classes(Direction::Backward);
        assert_eq!(fwd_left.replace("below", "above"), back_left);
        assert_eq!(fwd_right.replace("right", "left"), back_right);
    }
}
