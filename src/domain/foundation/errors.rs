//! Error types for the domain layer.
//!
//! The estimation engine itself never fails. These errors come from the strict
//! constructors and from parsing user-facing names into domain enums.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
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

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::OutOfRange { field, .. } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_bounds() {
        let err = ValidationError::out_of_range("conflict_rate", 0.0, 100.0, 120.0);
        assert_eq!(
            err.to_string(),
            "Field 'conflict_rate' must be between 0 and 100, got 120"
        );
        assert_eq!(err.field(), "conflict_rate");
    }

    #[test]
    fn invalid_format_message_includes_reason() {
        let err = ValidationError::invalid_format("recovery_scenario", "unknown scenario 'wild'");
        assert!(err.to_string().contains("unknown scenario 'wild'"));
        assert_eq!(err.field(), "recovery_scenario");
    }
}
