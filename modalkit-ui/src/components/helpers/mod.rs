//! Helper components

mod error_display;
mod loading_spinner;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
