//! Buttons used by the builder and the wizard

use dioxus::prelude::*;

/// Unstyled button that handles disabled/loading state and accessibility
/// attributes. `Button` and the icon buttons build on it.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] style: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            style: style.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if is_disabled { Some("true") } else { None },
            aria_busy: if loading { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background - publish and other primary actions
    Primary,
    /// Gray background
    Secondary,
    /// Red background - removing steps and fields
    Danger,
    /// No background - text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

/// Styled builder button
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let sizing = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-4 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-indigo-600 hover:bg-indigo-500 text-white",
        ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-gray-300",
        ButtonVariant::Danger => "bg-red-600 hover:bg-red-500 text-white",
        ButtonVariant::Ghost => "text-gray-400 hover:text-white hover:bg-gray-700/50",
    };

    let computed_class = format!(
        "inline-flex items-center gap-2 rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed {sizing} {variant_class} {}",
        class.as_deref().unwrap_or_default()
    );

    rsx! {
        ChromelessButton {
            disabled,
            loading,
            title,
            class: Some(computed_class),
            onclick,
            if loading {
                span { class: "w-3.5 h-3.5 rounded-full border-2 border-current border-t-transparent animate-spin" }
            }
            {children}
        }
    }
}

/// Small square button holding only an icon
#[component]
pub fn IconButton(
    /// Accessible label, also used as the tooltip
    label: String,
    #[props(default)] danger: bool,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let hover = if danger {
        "hover:text-red-400 hover:bg-red-500/10"
    } else {
        "hover:text-white hover:bg-gray-700/50"
    };

    rsx! {
        ChromelessButton {
            class: Some(
                format!(
                    "p-1.5 rounded text-gray-400 transition-colors disabled:opacity-40 disabled:cursor-not-allowed {hover}",
                ),
            ),
            disabled,
            title: Some(label.clone()),
            aria_label: Some(label),
            onclick,
            {children}
        }
    }
}
