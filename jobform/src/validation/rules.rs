//! Per-field validation rules.
//!
//! Each rule is a pure function of the field's current value. Text rules trim
//! before the emptiness and length checks, so whitespace-only input counts as
//! empty. Length checks count characters, not bytes.

use std::sync::LazyLock;

use regex::Regex;

use super::FieldOutcome;

// local@domain.tld with no whitespace, no extra `@`, and a TLD of at least
// two characters.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern"));

// North-American 10-digit numbers: `(area) local line` or three groups with
// `-`, `.`, or space separators (separators optional).
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\(\d{3}\)\s?|\d{3}[-.\s]?)\d{3}[-.\s]?\d{4}$").expect("phone pattern")
});

pub fn full_name(value: &str) -> FieldOutcome {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return FieldOutcome::Invalid("Please enter your full name.");
    }
    if trimmed.chars().count() < 2 {
        return FieldOutcome::Invalid("Name must be at least 2 characters.");
    }
    FieldOutcome::Valid
}

pub fn email(value: &str) -> FieldOutcome {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return FieldOutcome::Invalid("Please enter your email address.");
    }
    if !EMAIL.is_match(trimmed) {
        return FieldOutcome::Invalid("Please enter a valid email address.");
    }
    FieldOutcome::Valid
}

pub fn phone(value: &str) -> FieldOutcome {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return FieldOutcome::Invalid("Please enter your phone number.");
    }
    if !PHONE.is_match(trimmed) {
        return FieldOutcome::Invalid("Please enter a valid phone number (e.g. 123-456-7890).");
    }
    FieldOutcome::Valid
}

/// The position selector reports its selection value, empty when nothing is
/// selected.
pub fn position(value: &str) -> FieldOutcome {
    if value.is_empty() {
        return FieldOutcome::Invalid("Please select a position.");
    }
    FieldOutcome::Valid
}

/// Validates the checked count across the whole skills group.
pub fn skills(checked_count: usize) -> FieldOutcome {
    if checked_count == 0 {
        return FieldOutcome::Invalid("Please select at least one skill.");
    }
    FieldOutcome::Valid
}

pub fn cover_letter(value: &str) -> FieldOutcome {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return FieldOutcome::Invalid("Please write a short cover letter.");
    }
    if trimmed.chars().count() < 30 {
        return FieldOutcome::Invalid("Cover letter must be at least 30 characters.");
    }
    FieldOutcome::Valid
}
