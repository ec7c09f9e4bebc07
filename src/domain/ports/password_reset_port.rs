//! Password-reset port definition.

use async_trait::async_trait;

use crate::domain::errors::ResetError;

/// Port for the password-reset capability.
#[async_trait]
pub trait PasswordResetPort: Send + Sync {
    /// Sends a reset link to the given address. Resolves once; no retry.
    async fn send_reset_link(&self, email: &str) -> Result<(), ResetError>;
}
