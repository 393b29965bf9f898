//! Custom error types for Lineal
//!
//! This module defines the error hierarchy for the roster core using thiserror
//! for ergonomic error definitions. Authentication variants carry the exact
//! messages shown to operators, so callers can surface them verbatim.

use thiserror::Error;

/// The main error type for Lineal operations
#[derive(Error, Debug)]
pub enum LinealError {
    /// Backend I/O or decode failures; the operation fails as a whole
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// The account exists but has been deactivated
    #[error("Account is disabled. Contact Super Admin.")]
    AccountDisabled,

    /// The new password and its confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The new password fails the complexity policy
    #[error("Password must be at least 8 chars, 1 uppercase, 1 lowercase, 1 number.")]
    WeakPassword,

    /// A brand-new account was submitted without a password
    #[error("Password is required for new users.")]
    PasswordRequired,

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl LinealError {
    /// Create a "not found" error for user accounts
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LinealError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for LinealError {
    fn from(err: serde_json::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

/// Result type alias for Lineal operations
pub type LinealResult<T> = Result<T, LinealError>;
