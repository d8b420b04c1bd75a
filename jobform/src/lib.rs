//! Form layer for a terminal job-application form.
//!
//! Everything a host runtime needs to validate the form lives here: the
//! reactive field widgets, the per-field validation rules, the inline error
//! renderer, the submit/reset flow, and the live-feedback binder. The layer
//! is driven entirely through a [`FormContext`] built at startup, so tests
//! (and any other front end) can exercise it without a terminal.

pub mod field;
pub mod form;
pub mod schedule;
pub mod validation;
pub mod widgets;

pub use field::FieldId;
pub use form::{FieldEvent, FormContext};
pub use schedule::DeferredQueue;
pub use validation::{FieldOutcome, FormOutcome, Validatable};
pub use widgets::{
    CheckboxGroup, ErrorText, FeedbackKind, FeedbackRegion, SelectField, TextField,
};
