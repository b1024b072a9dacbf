pub mod api;
pub mod pages;

use dioxus::prelude::*;
use pages::{Builder, Embed};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Builder {},
    #[route("/embed/:id")]
    Embed { id: String },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
