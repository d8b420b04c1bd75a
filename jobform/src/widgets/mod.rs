//! Reactive form widgets.
//!
//! Widgets keep their state behind `Arc<RwLock<_>>`; cloning a widget yields
//! a handle to the same state, which is how the registry, the submit flow,
//! and the renderer all observe one form. Each instance has a process-unique
//! id, a dirty flag the renderer checks, and (where focusable) a
//! focus-request flag the host runtime consumes.

mod checkbox_group;
mod error_text;
mod feedback;
mod select_field;
mod text_field;

pub use checkbox_group::{CheckboxGroup, CheckboxGroupId};
pub use error_text::{ErrorText, ErrorTextId};
pub use feedback::{FeedbackKind, FeedbackRegion, FeedbackRegionId};
pub use select_field::{SelectField, SelectFieldId};
pub use text_field::{TextField, TextFieldId};
