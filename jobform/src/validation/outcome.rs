//! Validation outcome types.

use crate::field::FieldId;

/// Outcome of validating a single field.
///
/// The message lives only in the invalid case, so a message is present
/// exactly when validation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldOutcome {
    /// The field satisfies its rule.
    #[default]
    Valid,
    /// The field failed validation with the given message.
    Invalid(&'static str),
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The error message, if validation failed.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Invalid(msg) => Some(msg),
        }
    }
}

/// Outcome of a full-form validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormOutcome {
    /// Every field passed.
    #[default]
    Valid,
    /// At least one field failed. `first_invalid` is the earliest failing
    /// field in evaluation order; [`FieldId::Skills`] stands for the group's
    /// first checkbox.
    Invalid { first_invalid: FieldId },
}

impl FormOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The earliest failing field, if any.
    pub fn first_invalid(&self) -> Option<FieldId> {
        match self {
            Self::Valid => None,
            Self::Invalid { first_invalid } => Some(*first_invalid),
        }
    }
}
