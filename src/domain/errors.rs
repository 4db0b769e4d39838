//! Domain validation errors.

use chrono::{DateTime, Utc};
use std::fmt;

/// Errors that can occur during record and value object validation.
///
/// Every variant names the record kind (`"Task"`, `"Contact"`, ...) and the
/// offending field so callers can report exactly which constraint failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent.
    Missing {
        kind: &'static str,
        field: &'static str,
    },

    /// A field was shorter than its minimum length.
    TooShort {
        kind: &'static str,
        field: &'static str,
        min: usize,
    },

    /// A field exceeded its maximum length.
    TooLong {
        kind: &'static str,
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// The provided phone number is not exactly ten ASCII digits.
    InvalidPhone(String),

    /// A date that must lie in the future does not.
    NotInFuture {
        kind: &'static str,
        field: &'static str,
        date: DateTime<Utc>,
    },

    /// The record ID was already assigned at construction.
    ImmutableId { kind: &'static str },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field, .. }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::NotInFuture { field, .. } => field,
            Self::InvalidPhone(_) => "phone_number",
            Self::ImmutableId { .. } => "id",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { kind, field } => write!(f, "{} {} is required", kind, field),
            Self::TooShort { kind, field, min } => write!(
                f,
                "{} {} must be at least {} character(s)",
                kind, field, min
            ),
            Self::TooLong {
                kind,
                field,
                max,
                actual,
            } => write!(
                f,
                "{} {} cannot exceed {} characters (got {})",
                kind, field, max, actual
            ),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must be exactly 10 digits: {}", phone)
            }
            Self::NotInFuture { kind, field, date } => write!(
                f,
                "{} {} must be in the future: {}",
                kind,
                field,
                date.to_rfc3339()
            ),
            Self::ImmutableId { kind } => {
                write!(f, "{} ID cannot be changed after initialization", kind)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::TooLong {
            kind: "Task",
            field: "name",
            max: 20,
            actual: 25,
        };
        assert_eq!(
            err.to_string(),
            "Task name cannot exceed 20 characters (got 25)"
        );

        let err = ValidationError::Missing {
            kind: "Contact",
            field: "address",
        };
        assert_eq!(err.to_string(), "Contact address is required");

        let err = ValidationError::ImmutableId { kind: "Appointment" };
        assert_eq!(
            err.to_string(),
            "Appointment ID cannot be changed after initialization"
        );
    }

    #[test]
    fn test_validation_error_field() {
        assert_eq!(ValidationError::InvalidPhone("1".into()).field(), "phone_number");
        assert_eq!(ValidationError::ImmutableId { kind: "Task" }.field(), "id");
        let err = ValidationError::TooShort {
            kind: "Contact",
            field: "id",
            min: 1,
        };
        assert_eq!(err.field(), "id");
    }
}
