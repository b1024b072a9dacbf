//! Shared UI components

pub mod builder;
pub mod button;
pub mod helpers;
pub mod icons;
pub mod segmented_control;
pub mod text_input;
pub mod toast;
pub mod wizard;

pub use builder::BuilderView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton, IconButton};
pub use helpers::{ErrorDisplay, LoadingSpinner};
pub use icons::{DynamicIcon, NamedIcon};
pub use segmented_control::{Segment, SegmentedControl};
pub use text_input::{Checkbox, ColorInput, LabeledField, NativeSelect, TextArea, TextInput};
pub use toast::{Toast, TOAST_DURATION_MS};
pub use wizard::SignupWizard;
