//! Error types for the record registries.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// A registry precondition was violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOperation {
    /// A record with the same ID is already stored
    #[error("{kind} ID already exists: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// No record with the given ID is stored
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

/// Errors returned by registry update operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The new field value was rejected by the record
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The target record does not exist
    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperation),
}

impl RegistryError {
    /// Whether this error came from field validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while installing the log subscriber.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// A global subscriber was already set
    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// Convenience type alias for Results with InvalidOperation
pub type OperationResult<T> = Result<T, InvalidOperation>;

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
