//! Builder view components
//!
//! Pure, props-based components for authoring a `ModalConfig`. One editor
//! per panel type and field type, mirroring the wizard renderer.

mod card;
mod field_editor;
mod icon_select;
mod image_input;
mod panel_editor;
mod publish;
mod step_editor;
mod step_tabs;
mod style_editor;
mod view;

pub use card::{EditorCard, EditorItem};
pub use field_editor::FieldsEditor;
pub use icon_select::IconSelect;
pub use image_input::ImageInput;
pub use panel_editor::PanelEditor;
pub use publish::PublishPanel;
pub use step_editor::StepEditor;
pub use step_tabs::StepTabs;
pub use style_editor::{BrandingEditor, StyleEditor};
pub use view::BuilderView;
