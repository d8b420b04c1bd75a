//! Error rendering for single controls and the checkbox group.

use crate::validation::{FieldOutcome, Validatable};
use crate::widgets::ErrorText;

/// Render a field's validation outcome onto its control and error display.
///
/// An invalid outcome sets the display text, makes it visible, and marks the
/// control erroneous; a valid outcome clears all three. A missing control or
/// display makes the call a no-op.
pub fn show_field_error<W: Validatable>(
    control: Option<&W>,
    display: Option<&ErrorText>,
    outcome: FieldOutcome,
) {
    let (Some(control), Some(display)) = (control, display) else {
        return;
    };
    match outcome.message() {
        Some(msg) => {
            display.show(msg);
            control.set_error(msg);
        }
        None => {
            display.clear();
            control.clear_error();
        }
    }
}

/// Render the checkbox group's outcome onto its shared display.
///
/// The group has no single control to mark, so only the display changes.
pub fn show_group_error(display: Option<&ErrorText>, outcome: FieldOutcome) {
    let Some(display) = display else {
        return;
    };
    match outcome.message() {
        Some(msg) => display.show(msg),
        None => display.clear(),
    }
}
