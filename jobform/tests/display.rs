//! Tests for the error renderer entry points.

use jobform::form::display::{show_field_error, show_group_error};
use jobform::{ErrorText, FieldOutcome, TextField};

#[test]
fn test_error_text_starts_hidden_and_empty() {
    let display = ErrorText::new();
    assert!(!display.is_visible());
    assert_eq!(display.text(), "");
}

#[test]
fn test_show_field_error_sets_text_visibility_and_marking() {
    let field = TextField::new();
    let display = ErrorText::new();

    show_field_error(
        Some(&field),
        Some(&display),
        FieldOutcome::Invalid("Please enter your full name."),
    );

    assert!(display.is_visible());
    assert_eq!(display.text(), "Please enter your full name.");
    assert!(field.has_error());
    assert_eq!(field.error().as_deref(), Some("Please enter your full name."));
}

#[test]
fn test_show_field_error_valid_clears_everything() {
    let field = TextField::new();
    let display = ErrorText::new();
    show_field_error(Some(&field), Some(&display), FieldOutcome::Invalid("nope"));

    show_field_error(Some(&field), Some(&display), FieldOutcome::Valid);

    assert!(!display.is_visible());
    assert_eq!(display.text(), "");
    assert!(!field.has_error());
}

#[test]
fn test_show_field_error_missing_display_is_a_no_op() {
    let field = TextField::new();

    show_field_error(Some(&field), None, FieldOutcome::Invalid("nope"));

    // With the display absent the control is left untouched as well.
    assert!(!field.has_error());
}

#[test]
fn test_show_field_error_missing_control_is_a_no_op() {
    let display = ErrorText::new();

    show_field_error::<TextField>(None, Some(&display), FieldOutcome::Invalid("nope"));

    assert!(!display.is_visible());
}

#[test]
fn test_show_group_error_only_touches_the_display() {
    let display = ErrorText::new();

    show_group_error(Some(&display), FieldOutcome::Invalid("Please select at least one skill."));
    assert!(display.is_visible());
    assert_eq!(display.text(), "Please select at least one skill.");

    show_group_error(Some(&display), FieldOutcome::Valid);
    assert!(!display.is_visible());
    assert_eq!(display.text(), "");
}

#[test]
fn test_show_group_error_missing_display_is_a_no_op() {
    show_group_error(None, FieldOutcome::Invalid("nope"));
}
