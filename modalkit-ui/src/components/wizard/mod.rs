//! Signup modal renderer
//!
//! Pure, props-based components. The embed page and the builder preview
//! both render [`SignupWizard`] from a `ModalConfig`.

mod form_fields;
mod left_panel;
mod ticker;
mod view;

pub use form_fields::FormFieldsView;
pub use left_panel::LeftPanel;
pub use ticker::TrustedLogos;
pub use modalkit_common::panel::MOBILE_BREAKPOINT_PX;
pub use view::SignupWizard;
