//! modalkit-ui - Dioxus components for signup modals
//!
//! Contains the wizard renderer that site visitors see, the builder views
//! used to author a config, and the builder store. Components here are
//! props-driven; the web app owns data loading and side effects.

pub mod components;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
