//! Password-reset request use case.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::errors::ResetError;
use crate::domain::ports::PasswordResetPort;

/// Handles the password-reset request workflow.
#[derive(Clone)]
pub struct RequestResetUseCase {
    reset_port: Arc<dyn PasswordResetPort>,
}

impl RequestResetUseCase {
    /// Creates a new reset use case.
    #[must_use]
    pub const fn new(reset_port: Arc<dyn PasswordResetPort>) -> Self {
        Self { reset_port }
    }

    /// Requests a reset link for the given address.
    ///
    /// An empty address is rejected before reaching the port; the screen
    /// treats that as a no-op rather than a reported error.
    ///
    /// # Errors
    /// Returns an error if the address is empty or the port fails.
    pub async fn execute(&self, email: &str) -> Result<(), ResetError> {
        if email.is_empty() {
            debug!("Ignoring reset request with empty email");
            return Err(ResetError::EmptyEmail);
        }

        debug!("Requesting password reset link");
        self.reset_port.send_reset_link(email).await?;

        info!("Reset link request resolved");
        Ok(())
    }
}
