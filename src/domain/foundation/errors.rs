//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised while checking or constructing domain values.
///
/// Field-level failures carry the field id so they can be rendered inline
/// next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' does not offer option '{value}'")]
    InvalidOption { field: String, value: String },

    #[error("Unknown field '{field}'")]
    UnknownField { field: String },

    #[error("Field '{field}' expects a {expected} value")]
    KindMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid option validation error.
    pub fn invalid_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidOption {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        ValidationError::UnknownField {
            field: field.into(),
        }
    }

    /// Creates a kind mismatch error.
    pub fn kind_mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        ValidationError::KindMismatch {
            field: field.into(),
            expected,
        }
    }

    /// Returns the field this error is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::InvalidOption { field, .. }
            | ValidationError::UnknownField { field }
            | ValidationError::KindMismatch { field, .. } => Some(field),
            ValidationError::InvalidTransition { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("companyName");
        assert_eq!(format!("{}", err), "Field 'companyName' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("priority", 1, 5, 9);
        assert_eq!(
            format!("{}", err),
            "Field 'priority' must be between 1 and 5, got 9"
        );
    }

    #[test]
    fn validation_error_invalid_option_displays_correctly() {
        let err = ValidationError::invalid_option("industry", "mining");
        assert_eq!(
            format!("{}", err),
            "Field 'industry' does not offer option 'mining'"
        );
    }

    #[test]
    fn field_accessor_returns_field_for_field_errors() {
        assert_eq!(
            ValidationError::invalid_format("contactEmail", "bad").field(),
            Some("contactEmail")
        );
        assert_eq!(
            ValidationError::InvalidTransition {
                from: "a".into(),
                to: "b".into()
            }
            .field(),
            None
        );
    }
}
