//! Shared form context: the field registry.

use log::debug;

use crate::field::FieldId;
use crate::validation::FieldOutcome;
use crate::widgets::{CheckboxGroup, ErrorText, FeedbackRegion, SelectField, TextField};

use super::display::{show_field_error, show_group_error};

/// References to every control, its error display, and the feedback region.
///
/// Built once at startup and passed explicitly to the submit flow and the
/// live-feedback binder. Cloning shares the underlying widget state, so a
/// clone observes and mutates the same form; tests build their own context
/// and need no terminal.
///
/// Error displays and the feedback region are optional. An absent element
/// turns the affected render call into a no-op instead of a fault, so one
/// missing piece of markup never blocks validation of the other fields.
#[derive(Debug, Clone)]
pub struct FormContext {
    pub full_name: TextField,
    pub email: TextField,
    pub phone: TextField,
    pub position: SelectField,
    pub skills: CheckboxGroup,
    pub cover_letter: TextField,

    pub name_error: Option<ErrorText>,
    pub email_error: Option<ErrorText>,
    pub phone_error: Option<ErrorText>,
    pub position_error: Option<ErrorText>,
    pub skills_error: Option<ErrorText>,
    pub cover_error: Option<ErrorText>,

    pub feedback: Option<FeedbackRegion>,
}

impl FormContext {
    /// A context with every display element present.
    pub fn new() -> Self {
        Self {
            full_name: TextField::new(),
            email: TextField::new(),
            phone: TextField::new(),
            position: SelectField::new(),
            skills: CheckboxGroup::new(),
            cover_letter: TextField::new(),

            name_error: Some(ErrorText::new()),
            email_error: Some(ErrorText::new()),
            phone_error: Some(ErrorText::new()),
            position_error: Some(ErrorText::new()),
            skills_error: Some(ErrorText::new()),
            cover_error: Some(ErrorText::new()),

            feedback: Some(FeedbackRegion::new()),
        }
    }

    /// The error display for a field, if the markup provides one.
    pub fn error_display(&self, field: FieldId) -> Option<&ErrorText> {
        let display = match field {
            FieldId::FullName => &self.name_error,
            FieldId::Email => &self.email_error,
            FieldId::Phone => &self.phone_error,
            FieldId::Position => &self.position_error,
            FieldId::Skills => &self.skills_error,
            FieldId::CoverLetter => &self.cover_error,
        };
        display.as_ref()
    }

    /// Clear every field back to its pristine value.
    pub fn reset_values(&self) {
        self.full_name.clear();
        self.email.clear();
        self.phone.clear();
        self.position.clear();
        self.skills.clear_all();
        self.cover_letter.clear();
        debug!("form values cleared");
    }

    /// Remove every erroneous marking and hide every error display.
    pub fn clear_all_errors(&self) {
        show_field_error(
            Some(&self.full_name),
            self.name_error.as_ref(),
            FieldOutcome::Valid,
        );
        show_field_error(
            Some(&self.email),
            self.email_error.as_ref(),
            FieldOutcome::Valid,
        );
        show_field_error(
            Some(&self.phone),
            self.phone_error.as_ref(),
            FieldOutcome::Valid,
        );
        show_field_error(
            Some(&self.position),
            self.position_error.as_ref(),
            FieldOutcome::Valid,
        );
        show_group_error(self.skills_error.as_ref(), FieldOutcome::Valid);
        show_field_error(
            Some(&self.cover_letter),
            self.cover_error.as_ref(),
            FieldOutcome::Valid,
        );
    }

    /// Whether any part of the form changed since the last render; clears
    /// every dirty flag as it checks.
    pub fn take_dirty(&self) -> bool {
        let mut dirty = false;

        let widgets_dirty = self.full_name.is_dirty()
            || self.email.is_dirty()
            || self.phone.is_dirty()
            || self.position.is_dirty()
            || self.skills.is_dirty()
            || self.cover_letter.is_dirty();
        if widgets_dirty {
            dirty = true;
        }
        self.full_name.clear_dirty();
        self.email.clear_dirty();
        self.phone.clear_dirty();
        self.position.clear_dirty();
        self.skills.clear_dirty();
        self.cover_letter.clear_dirty();

        for field in FieldId::EVALUATION_ORDER {
            if let Some(display) = self.error_display(field) {
                if display.is_dirty() {
                    dirty = true;
                }
                display.clear_dirty();
            }
        }

        if let Some(feedback) = &self.feedback {
            if feedback.is_dirty() {
                dirty = true;
            }
            feedback.clear_dirty();
        }

        dirty
    }
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new()
    }
}
