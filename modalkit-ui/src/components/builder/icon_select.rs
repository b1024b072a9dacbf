//! Icon picker over the closed icon set

use crate::components::NativeSelect;
use dioxus::prelude::*;
use modalkit_common::IconName;

const NO_ICON: &str = "";

/// Dropdown of icon names. With `optional`, a "No icon" entry maps to `None`.
#[component]
pub fn IconSelect(
    value: Option<String>,
    on_change: EventHandler<Option<String>>,
    #[props(default)] optional: bool,
) -> Element {
    let mut options: Vec<(String, String)> = Vec::with_capacity(IconName::ALL.len() + 1);
    if optional {
        options.push((NO_ICON.to_string(), "No icon".to_string()));
    }
    options.extend(
        IconName::ALL
            .iter()
            .map(|icon| (icon.as_str().to_string(), icon.as_str().to_string())),
    );

    rsx! {
        NativeSelect {
            value: value.unwrap_or_default(),
            options,
            on_change: move |name: String| {
                on_change.call(if name == NO_ICON { None } else { Some(name) })
            },
        }
    }
}
