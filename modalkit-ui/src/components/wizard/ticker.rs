//! "Trusted by" logo strip

use dioxus::prelude::*;
use modalkit_common::panel::{ticker_fades_visible, ticker_track, TICKER_CYCLE_SECS};
use modalkit_common::{LogoDisplayMode, TrustedLogo};

/// Logo strip under the main panel. Renders nothing without logos.
#[component]
pub fn TrustedLogos(
    logos: Vec<TrustedLogo>,
    mode: LogoDisplayMode,
    /// Panel background, used to paint the edge fades
    background: String,
) -> Element {
    if logos.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "mt-auto pt-10",
            p { class: "text-xs uppercase tracking-wider text-white/70 mb-4", "Trusted by" }
            match mode {
                LogoDisplayMode::Ticker => rsx! {
                    LogoTicker { logos, background }
                },
                LogoDisplayMode::Static => rsx! {
                    div { class: "flex flex-wrap items-center gap-6",
                        for logo in logos.iter() {
                            LogoImage { key: "{logo.id}", logo: logo.clone() }
                        }
                    }
                },
            }
        }
    }
}

/// Track container. No flex gap: with 2N items a gap leaves 2N-1 spaces,
/// and half the track would fall short of one list period.
const TICKER_TRACK_CLASS: &str = "modalkit-ticker-track flex w-max items-center";

/// Each ticker slot carries its own trailing space, so a list copy is
/// exactly half the track.
const TICKER_ITEM_CLASS: &str = "pr-10 flex-shrink-0";

/// Infinitely scrolling logo track.
///
/// The track holds the list twice back to back and slides left by half its
/// width per cycle, so the loop is seamless.
#[component]
fn LogoTicker(logos: Vec<TrustedLogo>, background: String) -> Element {
    let show_fades = ticker_fades_visible(&background);
    let track = ticker_track(&logos)
        .into_iter()
        .map(|(copy, logo)| (format!("{copy}-{}", logo.id), logo.clone()))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "relative overflow-hidden",
            div {
                class: TICKER_TRACK_CLASS,
                style: "animation: modalkit-ticker {TICKER_CYCLE_SECS}s linear infinite;",
                for (key , logo) in track {
                    div { key: "{key}", class: TICKER_ITEM_CLASS,
                        LogoImage { logo }
                    }
                }
            }
            if show_fades {
                div {
                    class: "pointer-events-none absolute inset-y-0 left-0 w-12",
                    style: "background: linear-gradient(to right, {background}, transparent);",
                }
                div {
                    class: "pointer-events-none absolute inset-y-0 right-0 w-12",
                    style: "background: linear-gradient(to left, {background}, transparent);",
                }
            }
        }
    }
}

#[component]
fn LogoImage(logo: TrustedLogo) -> Element {
    rsx! {
        img {
            class: "h-8 w-auto object-contain opacity-80 brightness-0 invert flex-shrink-0",
            src: "{logo.url}",
            alt: "{logo.alt}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_spacing_lives_on_items() {
        // -50% of the track must equal one list period
        assert!(!TICKER_TRACK_CLASS.split_whitespace().any(|c| c.starts_with("gap-")));
        assert!(TICKER_ITEM_CLASS.split_whitespace().any(|c| c.starts_with("pr-")));
        assert!(!TICKER_ITEM_CLASS.split_whitespace().any(|c| c.starts_with("pl-")));
    }
}
