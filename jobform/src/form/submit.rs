//! Submit and reset flow.
//!
//! The submit transition validates every field in the declared order (full
//! form feedback, never fail-fast), then either reports the first invalid
//! field or simulates a successful submission. The reset transition only
//! schedules deferred cleanup; the host clears field values itself.

use log::{debug, info};

use crate::field::FieldId;
use crate::schedule::DeferredQueue;
use crate::validation::{FieldOutcome, FormOutcome, rules};
use crate::widgets::FeedbackKind;

use super::context::FormContext;
use super::display::{show_field_error, show_group_error};

/// Run one field's rule against its current value and render the result.
pub fn evaluate(ctx: &FormContext, field: FieldId) -> FieldOutcome {
    let outcome = match field {
        FieldId::FullName => rules::full_name(&ctx.full_name.value()),
        FieldId::Email => rules::email(&ctx.email.value()),
        FieldId::Phone => rules::phone(&ctx.phone.value()),
        FieldId::Position => rules::position(&ctx.position.value()),
        FieldId::Skills => rules::skills(ctx.skills.checked_count()),
        FieldId::CoverLetter => rules::cover_letter(&ctx.cover_letter.value()),
    };
    render(ctx, field, outcome);
    outcome
}

/// Route a field's outcome to the right renderer entry point.
fn render(ctx: &FormContext, field: FieldId, outcome: FieldOutcome) {
    let display = ctx.error_display(field);
    match field {
        FieldId::FullName => show_field_error(Some(&ctx.full_name), display, outcome),
        FieldId::Email => show_field_error(Some(&ctx.email), display, outcome),
        FieldId::Phone => show_field_error(Some(&ctx.phone), display, outcome),
        FieldId::Position => show_field_error(Some(&ctx.position), display, outcome),
        FieldId::Skills => show_group_error(display, outcome),
        FieldId::CoverLetter => show_field_error(Some(&ctx.cover_letter), display, outcome),
    }
}

/// Validate the whole form in the declared order, rendering every field.
///
/// Every field is (re-)rendered, passing fields included; the outcome
/// records the earliest failing field.
pub fn validate_form(ctx: &FormContext) -> FormOutcome {
    let mut first_invalid = None;
    for field in FieldId::EVALUATION_ORDER {
        let outcome = evaluate(ctx, field);
        if outcome.is_invalid() && first_invalid.is_none() {
            first_invalid = Some(field);
        }
    }
    match first_invalid {
        None => FormOutcome::Valid,
        Some(first_invalid) => FormOutcome::Invalid { first_invalid },
    }
}

/// Handle a submit intent.
pub fn handle_submit(ctx: &FormContext) -> FormOutcome {
    if let Some(feedback) = &ctx.feedback {
        feedback.clear();
    }

    let outcome = validate_form(ctx);

    match outcome {
        FormOutcome::Invalid { first_invalid } => {
            info!("submit rejected, first invalid field: {first_invalid}");
            if let Some(feedback) = &ctx.feedback {
                feedback.set(
                    "Please fix the errors below and resubmit the form.",
                    FeedbackKind::Error,
                );
            }
            focus_field(ctx, first_invalid);
        }
        FormOutcome::Valid => {
            info!("submit accepted");
            if let Some(feedback) = &ctx.feedback {
                feedback.set(
                    "Application submitted successfully — thank you!",
                    FeedbackKind::Success,
                );
            }
            ctx.reset_values();
            ctx.clear_all_errors();
            if let Some(feedback) = &ctx.feedback {
                feedback.focus();
            }
        }
    }
    outcome
}

/// Move input focus to a field; the skills group focuses its first checkbox.
fn focus_field(ctx: &FormContext, field: FieldId) {
    debug!("focus requested for {field}");
    match field {
        FieldId::FullName => ctx.full_name.focus(),
        FieldId::Email => ctx.email.focus(),
        FieldId::Phone => ctx.phone.focus(),
        FieldId::Position => ctx.position.focus(),
        FieldId::Skills => ctx.skills.focus_first(),
        FieldId::CoverLetter => ctx.cover_letter.focus(),
    }
}

/// Handle a reset intent.
///
/// The host clears field values when it processes the reset; the error and
/// feedback cleanup here is deferred to the end of the turn so it runs
/// strictly after those values are gone.
pub fn handle_reset(ctx: &FormContext, tasks: &DeferredQueue) {
    let ctx = ctx.clone();
    tasks.defer(move || {
        debug!("post-reset cleanup");
        if let Some(feedback) = &ctx.feedback {
            feedback.clear();
        }
        ctx.clear_all_errors();
    });
}
