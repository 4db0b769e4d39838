//! Field-level validation rules shared by every record kind.

use super::errors::ValidationError;
use chrono::{DateTime, Utc};

/// Length constraint for a text field, measured in `char`s.
///
/// # Example
///
/// ```
/// use record_keeper::domain::TextRule;
///
/// const NAME: TextRule = TextRule::new("name", 20);
/// assert!(NAME.check("Task", "Write report").is_ok());
/// assert!(NAME.check("Task", &"x".repeat(21)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRule {
    /// Field name used in error messages.
    pub field: &'static str,
    /// Minimum number of characters (0 means empty is allowed).
    pub min: usize,
    /// Maximum number of characters.
    pub max: usize,
}

impl TextRule {
    /// A field that may be empty but not longer than `max`.
    pub const fn new(field: &'static str, max: usize) -> Self {
        Self { field, min: 0, max }
    }

    /// A field that must hold at least one character.
    pub const fn non_empty(field: &'static str, max: usize) -> Self {
        Self { field, min: 1, max }
    }

    /// Check `value` against this rule on behalf of record kind `kind`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooShort` or `ValidationError::TooLong`.
    pub fn check(&self, kind: &'static str, value: &str) -> Result<(), ValidationError> {
        let actual = value.chars().count();
        if actual < self.min {
            return Err(ValidationError::TooShort {
                kind,
                field: self.field,
                min: self.min,
            });
        }
        if actual > self.max {
            return Err(ValidationError::TooLong {
                kind,
                field: self.field,
                max: self.max,
                actual,
            });
        }
        Ok(())
    }

    /// Unwrap an optional draft value, then check it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Missing` when `value` is `None`, otherwise
    /// whatever [`TextRule::check`] reports.
    pub fn require(
        &self,
        kind: &'static str,
        value: Option<String>,
    ) -> Result<String, ValidationError> {
        let value = required(kind, self.field, value)?;
        self.check(kind, &value)?;
        Ok(value)
    }
}

/// Reject an absent required value.
pub fn required<T>(
    kind: &'static str,
    field: &'static str,
    value: Option<T>,
) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { kind, field })
}

/// Require `date` to be strictly later than `now`.
pub fn ensure_future(
    kind: &'static str,
    field: &'static str,
    date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if date <= now {
        return Err(ValidationError::NotInFuture { kind, field, date });
    }
    Ok(())
}
