//! Validatable trait for controls that carry an error slot.

/// Controls the validation layer can read from and mark.
///
/// The renderer works through this trait so it can treat text fields and the
/// position selector uniformly: read the current value, set or clear the
/// erroneous marking, and name the control for focus bookkeeping.
pub trait Validatable {
    /// The value type the field's rule consumes.
    type Value;

    /// Extract the current value for validation.
    fn validation_value(&self) -> Self::Value;

    /// Mark the control as erroneous.
    fn set_error(&self, msg: impl Into<String>);

    /// Remove the erroneous marking.
    fn clear_error(&self);

    /// Whether the control is currently marked erroneous.
    fn has_error(&self) -> bool;

    /// The current error message, if any.
    fn error(&self) -> Option<String>;

    /// The control's widget id, for focus bookkeeping and logging.
    fn widget_id(&self) -> String;
}
