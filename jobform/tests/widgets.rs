//! Tests for widget state behavior the form layer relies on.

use jobform::{CheckboxGroup, FormContext, SelectField, TextField};

// ============================================================================
// TextField editing
// ============================================================================

#[test]
fn test_text_field_insert_and_delete() {
    let field = TextField::new();
    for c in "abc".chars() {
        field.insert_char(c);
    }
    assert_eq!(field.value(), "abc");
    assert_eq!(field.cursor(), 3);

    field.delete_char_before();
    assert_eq!(field.value(), "ab");

    field.cursor_home();
    field.delete_char_at();
    assert_eq!(field.value(), "b");
}

#[test]
fn test_text_field_cursor_respects_char_boundaries() {
    let field = TextField::new();
    field.insert_char('é');
    field.insert_char('x');
    assert_eq!(field.value(), "éx");

    field.cursor_left();
    field.cursor_left();
    assert_eq!(field.cursor(), 0);
    field.cursor_right();
    assert_eq!(field.cursor(), 'é'.len_utf8());

    field.delete_char_before();
    assert_eq!(field.value(), "x");
}

#[test]
fn test_text_field_clear_resets_cursor_but_not_error() {
    let field = TextField::new();
    field.set_value("hello");
    field.set_error("bad");

    field.clear();

    assert!(field.is_empty());
    assert_eq!(field.cursor(), 0);
    // Clearing the value is not a validation pass.
    assert!(field.has_error());
}

#[test]
fn test_text_field_clones_share_state() {
    let field = TextField::new();
    let handle = field.clone();
    handle.set_value("shared");
    assert_eq!(field.value(), "shared");
    assert_eq!(field.id(), handle.id());
}

// ============================================================================
// SelectField
// ============================================================================

#[test]
fn test_select_value_is_empty_until_selected() {
    let select = SelectField::new();
    select.set_options(vec!["One", "Two"]);
    assert_eq!(select.value(), "");

    select.select(1);
    assert_eq!(select.value(), "Two");

    select.clear();
    assert_eq!(select.value(), "");
}

#[test]
fn test_select_next_and_prev_saturate() {
    let select = SelectField::new();
    select.set_options(vec!["One", "Two", "Three"]);

    select.select_next();
    assert_eq!(select.selected(), Some(0));
    select.select_next();
    select.select_next();
    select.select_next();
    assert_eq!(select.selected(), Some(2));

    select.select_prev();
    assert_eq!(select.selected(), Some(1));
    select.select_prev();
    select.select_prev();
    assert_eq!(select.selected(), Some(0));
}

#[test]
fn test_select_out_of_range_is_ignored() {
    let select = SelectField::new();
    select.set_options(vec!["One"]);
    select.select(7);
    assert_eq!(select.selected(), None);
}

// ============================================================================
// CheckboxGroup
// ============================================================================

#[test]
fn test_group_checked_count() {
    let group = CheckboxGroup::new();
    group.set_options(vec!["Rust", "SQL", "Docker"]);
    assert_eq!(group.checked_count(), 0);

    group.toggle(0);
    group.set_checked(2, true);
    assert_eq!(group.checked_count(), 2);

    group.toggle(0);
    assert_eq!(group.checked_count(), 1);

    group.clear_all();
    assert_eq!(group.checked_count(), 0);
}

#[test]
fn test_group_out_of_range_toggle_is_ignored() {
    let group = CheckboxGroup::new();
    group.set_options(vec!["Rust"]);
    group.toggle(3);
    group.set_checked(9, true);
    assert_eq!(group.checked_count(), 0);
}

#[test]
fn test_group_set_options_resets_checked_state() {
    let group = CheckboxGroup::new();
    group.set_options(vec!["Rust", "SQL"]);
    group.toggle(1);

    group.set_options(vec!["Docker", "Kubernetes", "Terraform"]);

    assert_eq!(group.len(), 3);
    assert_eq!(group.checked_count(), 0);
}

// ============================================================================
// Context dirty tracking
// ============================================================================

#[test]
fn test_take_dirty_reports_once_per_change() {
    let ctx = FormContext::new();
    ctx.skills.set_options(vec!["Rust"]);
    assert!(ctx.take_dirty());
    assert!(!ctx.take_dirty());

    ctx.full_name.insert_char('J');
    assert!(ctx.take_dirty());
    assert!(!ctx.take_dirty());
}
