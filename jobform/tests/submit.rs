//! Tests for the submit and reset transitions.

use jobform::form::{live, submit};
use jobform::{DeferredQueue, FeedbackKind, FieldEvent, FieldId, FormContext, FormOutcome};

const POSITIONS: [&str; 3] = ["Frontend Developer", "Backend Developer", "DevOps Engineer"];
const SKILLS: [&str; 4] = ["Rust", "TypeScript", "SQL", "Docker"];

fn context() -> FormContext {
    let ctx = FormContext::new();
    ctx.position.set_options(POSITIONS.to_vec());
    ctx.skills.set_options(SKILLS.to_vec());
    ctx
}

fn fill_valid(ctx: &FormContext) {
    ctx.full_name.set_value("Jane Doe");
    ctx.email.set_value("jane@example.com");
    ctx.phone.set_value("123-456-7890");
    ctx.position.select(1);
    ctx.skills.set_checked(0, true);
    ctx.cover_letter
        .set_value("I have shipped terminal tooling for six years.");
}

fn feedback_text(ctx: &FormContext) -> String {
    ctx.feedback.as_ref().expect("feedback region").text()
}

fn feedback_kind(ctx: &FormContext) -> Option<FeedbackKind> {
    ctx.feedback.as_ref().expect("feedback region").kind()
}

fn visible_displays(ctx: &FormContext) -> Vec<FieldId> {
    FieldId::EVALUATION_ORDER
        .into_iter()
        .filter(|field| {
            ctx.error_display(*field)
                .is_some_and(|display| display.is_visible())
        })
        .collect()
}

// ============================================================================
// Submit: invalid forms
// ============================================================================

#[test]
fn test_submit_all_invalid_reports_first_field() {
    let ctx = context();

    let outcome = submit::handle_submit(&ctx);

    assert_eq!(
        outcome,
        FormOutcome::Invalid {
            first_invalid: FieldId::FullName
        }
    );
    assert_eq!(
        feedback_text(&ctx),
        "Please fix the errors below and resubmit the form."
    );
    assert_eq!(feedback_kind(&ctx), Some(FeedbackKind::Error));
    // Focus lands on the name field, the earliest in evaluation order.
    assert!(ctx.full_name.take_focus_request());
    assert!(!ctx.email.take_focus_request());
}

#[test]
fn test_submit_renders_every_field_not_just_the_first() {
    let ctx = context();

    submit::handle_submit(&ctx);

    assert_eq!(visible_displays(&ctx), FieldId::EVALUATION_ORDER.to_vec());
    assert_eq!(
        ctx.error_display(FieldId::FullName).unwrap().text(),
        "Please enter your full name."
    );
    assert_eq!(
        ctx.error_display(FieldId::Skills).unwrap().text(),
        "Please select at least one skill."
    );
    assert_eq!(
        ctx.error_display(FieldId::CoverLetter).unwrap().text(),
        "Please write a short cover letter."
    );
}

#[test]
fn test_submit_first_invalid_follows_evaluation_order() {
    let ctx = context();
    ctx.full_name.set_value("Jane Doe");
    ctx.email.set_value("jane@example.com");

    let outcome = submit::handle_submit(&ctx);

    assert_eq!(outcome.first_invalid(), Some(FieldId::Phone));
    assert!(ctx.phone.take_focus_request());
}

#[test]
fn test_submit_skills_only_invalid_focuses_first_checkbox() {
    let ctx = context();
    fill_valid(&ctx);
    ctx.skills.clear_all();

    let outcome = submit::handle_submit(&ctx);

    assert_eq!(outcome.first_invalid(), Some(FieldId::Skills));
    // The group's focus request stands for its first checkbox.
    assert!(ctx.skills.take_focus_request());
    assert_eq!(visible_displays(&ctx), vec![FieldId::Skills]);
}

#[test]
fn test_submit_skills_lose_tie_break_to_earlier_field() {
    let ctx = context();
    fill_valid(&ctx);
    ctx.skills.clear_all();
    ctx.email.set_value("not-an-email");

    let outcome = submit::handle_submit(&ctx);

    assert_eq!(outcome.first_invalid(), Some(FieldId::Email));
    assert!(ctx.email.take_focus_request());
    assert!(!ctx.skills.take_focus_request());
}

#[test]
fn test_submit_marks_controls_erroneous() {
    let ctx = context();

    submit::handle_submit(&ctx);

    assert!(ctx.full_name.has_error());
    assert!(ctx.position.has_error());
    assert!(ctx.cover_letter.has_error());
}

#[test]
fn test_failed_submit_keeps_field_values() {
    let ctx = context();
    ctx.full_name.set_value("Jane Doe");

    submit::handle_submit(&ctx);

    assert_eq!(ctx.full_name.value(), "Jane Doe");
}

// ============================================================================
// Submit: valid form
// ============================================================================

#[test]
fn test_submit_valid_shows_success_and_clears_form() {
    let ctx = context();
    fill_valid(&ctx);

    let outcome = submit::handle_submit(&ctx);

    assert_eq!(outcome, FormOutcome::Valid);
    assert_eq!(
        feedback_text(&ctx),
        "Application submitted successfully — thank you!"
    );
    assert_eq!(feedback_kind(&ctx), Some(FeedbackKind::Success));

    // Every value is cleared and every display hidden.
    assert!(ctx.full_name.is_empty());
    assert!(ctx.email.is_empty());
    assert!(ctx.phone.is_empty());
    assert_eq!(ctx.position.selected(), None);
    assert_eq!(ctx.skills.checked_count(), 0);
    assert!(ctx.cover_letter.is_empty());
    assert!(visible_displays(&ctx).is_empty());

    // Focus moves to the feedback region, best-effort.
    assert!(ctx.feedback.as_ref().unwrap().take_focus_request());
}

#[test]
fn test_submit_clears_previous_feedback_first() {
    let ctx = context();
    fill_valid(&ctx);
    submit::handle_submit(&ctx);
    assert_eq!(feedback_kind(&ctx), Some(FeedbackKind::Success));

    // The next attempt replaces the success message with an error one.
    submit::handle_submit(&ctx);
    assert_eq!(feedback_kind(&ctx), Some(FeedbackKind::Error));
}

#[test]
fn test_resubmit_after_success_fails_like_a_fresh_form() {
    let ctx = context();
    fill_valid(&ctx);
    assert_eq!(submit::handle_submit(&ctx), FormOutcome::Valid);

    let fresh = context();
    assert_eq!(submit::handle_submit(&ctx), submit::handle_submit(&fresh));
    assert_eq!(
        ctx.error_display(FieldId::FullName).unwrap().text(),
        "Please enter your full name."
    );
}

// ============================================================================
// Missing markup tolerance
// ============================================================================

#[test]
fn test_submit_without_feedback_region() {
    let mut ctx = context();
    ctx.feedback = None;

    // Both branches still run to completion without a feedback region.
    assert!(submit::handle_submit(&ctx).is_invalid());
    fill_valid(&ctx);
    assert!(submit::handle_submit(&ctx).is_valid());
}

#[test]
fn test_submit_with_missing_error_display() {
    let mut ctx = context();
    ctx.name_error = None;

    submit::handle_submit(&ctx);

    // The missing display is skipped; the other fields still render.
    assert!(
        ctx.error_display(FieldId::Email)
            .is_some_and(|display| display.is_visible())
    );
}

// ============================================================================
// Reset transition
// ============================================================================

#[test]
fn test_reset_cleanup_is_deferred_until_drain() {
    let ctx = context();
    let tasks = DeferredQueue::new();
    submit::handle_submit(&ctx);
    assert!(!visible_displays(&ctx).is_empty());

    // Phase 1: the host clears field values.
    ctx.reset_values();
    // Phase 2 is only scheduled here, not run.
    submit::handle_reset(&ctx, &tasks);
    assert_eq!(tasks.pending(), 1);
    assert!(!visible_displays(&ctx).is_empty());
    assert!(ctx.feedback.as_ref().unwrap().has_message());

    tasks.drain();

    assert!(visible_displays(&ctx).is_empty());
    assert!(!ctx.feedback.as_ref().unwrap().has_message());
    assert!(!ctx.full_name.has_error());
    assert!(tasks.is_empty());
}

#[test]
fn test_reset_clears_success_feedback_too() {
    let ctx = context();
    let tasks = DeferredQueue::new();
    fill_valid(&ctx);
    submit::handle_submit(&ctx);
    assert_eq!(feedback_kind(&ctx), Some(FeedbackKind::Success));

    ctx.reset_values();
    submit::handle_reset(&ctx, &tasks);
    tasks.drain();

    assert_eq!(feedback_kind(&ctx), None);
}

// ============================================================================
// Live feedback never reaches global feedback
// ============================================================================

#[test]
fn test_live_validation_leaves_feedback_untouched() {
    let ctx = context();

    live::on_field_event(&ctx, FieldEvent::Blur(FieldId::FullName));
    live::on_field_event(&ctx, FieldEvent::Changed(FieldId::Skills));

    assert!(!ctx.feedback.as_ref().unwrap().has_message());
}
