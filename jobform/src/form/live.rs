//! Live per-field validation, independent of submit.

use log::trace;

use crate::field::FieldId;
use crate::validation::rules;

use super::context::FormContext;
use super::display::{show_field_error, show_group_error};

/// A field-level event from the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The field lost input focus.
    Blur(FieldId),
    /// The field's value changed.
    Changed(FieldId),
}

/// Re-validate the single field an event is bound to and re-render its error
/// display.
///
/// Text fields re-validate on blur, the position selector on change, and the
/// skills group on any checkbox change (recomputing the checked count across
/// the whole group). Unbound (event, field) pairings are ignored, and the
/// global feedback region is never touched from here.
pub fn on_field_event(ctx: &FormContext, event: FieldEvent) {
    trace!("field event: {event:?}");
    match event {
        FieldEvent::Blur(FieldId::FullName) => show_field_error(
            Some(&ctx.full_name),
            ctx.name_error.as_ref(),
            rules::full_name(&ctx.full_name.value()),
        ),
        FieldEvent::Blur(FieldId::Email) => show_field_error(
            Some(&ctx.email),
            ctx.email_error.as_ref(),
            rules::email(&ctx.email.value()),
        ),
        FieldEvent::Blur(FieldId::Phone) => show_field_error(
            Some(&ctx.phone),
            ctx.phone_error.as_ref(),
            rules::phone(&ctx.phone.value()),
        ),
        FieldEvent::Changed(FieldId::Position) => show_field_error(
            Some(&ctx.position),
            ctx.position_error.as_ref(),
            rules::position(&ctx.position.value()),
        ),
        FieldEvent::Changed(FieldId::Skills) => show_group_error(
            ctx.skills_error.as_ref(),
            rules::skills(ctx.skills.checked_count()),
        ),
        FieldEvent::Blur(FieldId::CoverLetter) => show_field_error(
            Some(&ctx.cover_letter),
            ctx.cover_error.as_ref(),
            rules::cover_letter(&ctx.cover_letter.value()),
        ),
        _ => {}
    }
}
