//! Image-capture error types.

use thiserror::Error;

/// Image-capture error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CaptureError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("unexpected capture error: {message}")]
    Unexpected { message: String },
}

impl CaptureError {
    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the error stems from a denied permission.
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied)
    }
}
