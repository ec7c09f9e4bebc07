//! Simulated password-reset adapter.
//!
//! Stands in for a real account service. The call suspends for a fixed
//! delay and then resolves once; no retry, no cancellation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::errors::ResetError;
use crate::domain::ports::PasswordResetPort;

/// Simulated reset client with a fixed resolution delay.
pub struct SimulatedResetClient {
    delay: Duration,
}

impl SimulatedResetClient {
    /// Creates a client resolving after the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PasswordResetPort for SimulatedResetClient {
    async fn send_reset_link(&self, email: &str) -> Result<(), ResetError> {
        if email.is_empty() {
            return Err(ResetError::EmptyEmail);
        }

        debug!(delay_ms = self.delay.as_millis(), "Simulating reset call");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn resolves_after_fixed_delay() {
        let client = SimulatedResetClient::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        client.send_reset_link("a@b.com").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn rejects_empty_email() {
        let client = SimulatedResetClient::new(Duration::ZERO);
        assert!(matches!(
            client.send_reset_link("").await,
            Err(ResetError::EmptyEmail)
        ));
    }
}
