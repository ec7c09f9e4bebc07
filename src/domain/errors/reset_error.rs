//! Password-reset error types.

use thiserror::Error;

/// Password-reset error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ResetError {
    #[error("email address is empty")]
    EmptyEmail,

    #[error("unexpected reset error: {message}")]
    Unexpected { message: String },
}

impl ResetError {
    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}
