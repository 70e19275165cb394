//! Domain-specific error types and error handling.

pub mod api_error;
pub mod user_facing;

pub use api_error::ApiError;
pub use user_facing::{ErrorHandler, Severity, UserFacingError};

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,
}

/// Core domain errors
///
/// Validation failures keep their human-readable message verbatim so the
/// presentation layer can show them close to as-is. Transport failures are
/// carried as a single structured [`ApiError`] value classified once at
/// the HTTP client boundary.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for a validation failure with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = DomainError::validation("email is required");
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn test_api_error_is_transparent() {
        let api = ApiError::timeout();
        let message = api.to_string();
        let err: DomainError = api.into();
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            DomainError::from(AuthError::InvalidCredentials).to_string(),
            "Invalid credentials"
        );
    }
}
