//! Contract error types for OTP settings
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// OTP settings domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OtpSettingsError {
    /// Persistence layer failure (connectivity, constraint violation)
    #[error("Store error: {message}")]
    Store { message: String },

    /// Malformed update input, rejected before any store call
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Read failure; callers present an empty list plus an error indication
    #[error("Retrieval error: {message}")]
    Retrieval { message: String },
}

impl OtpSettingsError {
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn retrieval(message: impl Into<String>) -> Self {
        Self::Retrieval {
            message: message.into(),
        }
    }
}
