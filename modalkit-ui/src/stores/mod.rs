//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing. The
//! web app owns the store; views receive a `ReadStore` and report edits
//! back as actions.

pub mod builder;

pub use builder::*;
