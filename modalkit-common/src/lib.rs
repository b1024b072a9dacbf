//! modalkit-common - configuration model and pure logic for signup modals
//!
//! Everything in here is free of UI and I/O so it can be shared by the
//! Dioxus components, the web app and the config server.

pub mod builder;
pub mod config;
pub mod embed;
pub mod form;
pub mod icon;
pub mod layout;
pub mod panel;
pub mod starter;
pub mod validate;
pub mod wizard;

pub use config::*;
pub use form::{FormData, FormValue};
pub use icon::IconName;
pub use layout::{pack_rows, FieldRow};
pub use validate::ConfigError;
pub use wizard::{resolve_step, Direction, Transition, WizardState};
