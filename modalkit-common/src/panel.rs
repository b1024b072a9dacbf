//! Presentation rules for the left panel that don't depend on the UI toolkit

use crate::config::{ModalStyle, StepConfig, TrustedLogo};

/// Left panel color used when neither the step nor the style sets one
pub const DEFAULT_LEFT_PANEL_COLOR: &str = "#f97316";

/// Progress bar color used when the style has no primary color
pub const DEFAULT_PRIMARY_COLOR: &str = "#f97316";

/// Seconds for the ticker to scroll one full copy of the logo list
pub const TICKER_CYCLE_SECS: u32 = 20;

/// Delay between successive feature cards appearing
pub const FEATURE_STAGGER_MS: u32 = 100;

/// Gradients are recognised purely by the `gradient` token in the value
pub fn is_gradient(color: &str) -> bool {
    color.contains("gradient")
}

/// Background for a resolved step: its own override, then the global style
pub fn panel_background(step: &StepConfig, style: &ModalStyle) -> String {
    step.panel_background_color
        .as_deref()
        .or(style.left_panel_color.as_deref())
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_LEFT_PANEL_COLOR)
        .to_string()
}

/// CSS declaration for a panel background.
///
/// Gradients need the `background` shorthand; solid colors use
/// `background-color` so they can transition.
pub fn background_css(color: &str) -> String {
    if is_gradient(color) {
        format!("background: {color};")
    } else {
        format!("background-color: {color};")
    }
}

/// Below this body width the wizard stacks vertically and shows the left
/// panel only on the first step
pub const MOBILE_BREAKPOINT_PX: f64 = 640.0;

pub fn is_mobile_width(body_width: f64) -> bool {
    body_width < MOBILE_BREAKPOINT_PX
}

/// Whether the left panel is shown for a 1-based `step` at `body_width`
pub fn left_panel_visible(body_width: f64, step: usize) -> bool {
    !is_mobile_width(body_width) || step == 1
}

/// Edge fades blend into the panel color, which only works for solid colors
pub fn ticker_fades_visible(background: &str) -> bool {
    !is_gradient(background)
}

/// Logos laid out on the ticker track: two back-to-back copies of the list,
/// tagged with the copy index so keys stay unique.
pub fn ticker_track(logos: &[TrustedLogo]) -> Vec<(usize, &TrustedLogo)> {
    (0..2)
        .flat_map(|copy| logos.iter().map(move |logo| (copy, logo)))
        .collect()
}

/// Entrance delay for the feature card at `index`
pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * FEATURE_STAGGER_MS
}

/// CSS font stack for a configured font family
pub fn font_stack(font_family: Option<&str>) -> String {
    match font_family.map(str::trim) {
        None | Some("") | Some("system") => {
            "system-ui, -apple-system, 'Segoe UI', sans-serif".to_string()
        }
        Some("inter") => "'Inter', system-ui, sans-serif".to_string(),
        Some("helvetica") => "'Helvetica Neue', Helvetica, Arial, sans-serif".to_string(),
        Some("arial") => "Arial, sans-serif".to_string(),
        Some("roboto") => "'Roboto', system-ui, sans-serif".to_string(),
        Some(other) => format!("{other}, system-ui, sans-serif"),
    }
}

/// Font choices offered by the style editor: (value, label)
pub const FONT_OPTIONS: [(&str, &str); 5] = [
    ("inter", "Inter"),
    ("helvetica", "Helvetica"),
    ("arial", "Arial"),
    ("roboto", "Roboto"),
    ("system", "System Default"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PanelContent, PanelType};

    fn step(bg: Option<&str>) -> StepConfig {
        StepConfig {
            headline: String::new(),
            subheadline: String::new(),
            panel: PanelContent::skeleton(PanelType::Main),
            fields: vec![],
            inherit_previous_panel: false,
            panel_background_color: bg.map(str::to_string),
        }
    }

    #[test]
    fn gradient_detection_is_substring_based() {
        assert!(is_gradient("linear-gradient(135deg, #f97316, #9333ea)"));
        assert!(is_gradient("radial-gradient(circle, red, blue)"));
        assert!(!is_gradient("#f97316"));
        assert!(!is_gradient("rgb(10, 20, 30)"));
    }

    #[test]
    fn background_prefers_step_then_style_then_default() {
        let style = ModalStyle {
            left_panel_color: Some("#222".into()),
            ..Default::default()
        };
        assert_eq!(panel_background(&step(Some("#111")), &style), "#111");
        assert_eq!(panel_background(&step(None), &style), "#222");
        assert_eq!(
            panel_background(&step(None), &ModalStyle::default()),
            DEFAULT_LEFT_PANEL_COLOR
        );
    }

    #[test]
    fn left_panel_hidden_on_narrow_screens_after_first_step() {
        assert!(left_panel_visible(639.9, 1));
        assert!(!left_panel_visible(639.9, 2));
        assert!(left_panel_visible(640.0, 1));
        assert!(left_panel_visible(640.0, 2));
        assert!(!left_panel_visible(320.0, 5));
    }

    #[test]
    fn unmeasured_width_counts_as_desktop() {
        assert!(!is_mobile_width(f64::INFINITY));
        assert!(left_panel_visible(f64::INFINITY, 3));
    }

    #[test]
    fn fades_hidden_on_gradients() {
        assert!(ticker_fades_visible("#000"));
        assert!(!ticker_fades_visible("linear-gradient(red, blue)"));
        assert_eq!(background_css("#000"), "background-color: #000;");
        assert_eq!(
            background_css("linear-gradient(red, blue)"),
            "background: linear-gradient(red, blue);"
        );
    }

    #[test]
    fn ticker_track_holds_two_copies() {
        for n in [0usize, 1, 3, 7] {
            let logos: Vec<_> = (0..n)
                .map(|i| TrustedLogo {
                    id: format!("l{i}"),
                    url: format!("https://example.com/{i}.svg"),
                    alt: String::new(),
                })
                .collect();
            let track = ticker_track(&logos);
            assert_eq!(track.len(), 2 * n);
            if n > 0 {
                assert_eq!(track[0].1.id, track[n].1.id);
                assert_eq!(track[n - 1].0, 0);
                assert_eq!(track[n].0, 1);
            }
        }
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), FEATURE_STAGGER_MS);
        assert_eq!(stagger_delay_ms(3), 3 * FEATURE_STAGGER_MS);
    }

    #[test]
    fn font_stacks() {
        assert!(font_stack(None).starts_with("system-ui"));
        assert!(font_stack(Some("inter")).starts_with("'Inter'"));
        assert_eq!(font_stack(Some("Georgia")), "Georgia, system-ui, sans-serif");
    }
}
