//! Simulated camera adapter.
//!
//! Stands in for the platform image-capture capability. Behavior is scripted
//! through configuration so every branch of the capture flow (grant, deny,
//! cancel) can be exercised without real hardware.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::domain::errors::CaptureError;
use crate::domain::ports::{CaptureConfig, CaptureOutcome, ImageCapturePort, PermissionStatus};
use crate::infrastructure::config::CameraBehavior;

/// Simulated camera following a configured script.
pub struct SimulatedCamera {
    behavior: CameraBehavior,
}

impl SimulatedCamera {
    /// Creates a camera with the given scripted behavior.
    #[must_use]
    pub const fn new(behavior: CameraBehavior) -> Self {
        Self { behavior }
    }
}

#[async_trait]
impl ImageCapturePort for SimulatedCamera {
    async fn request_permission(&self) -> Result<PermissionStatus, CaptureError> {
        let status = match self.behavior {
            CameraBehavior::Deny => PermissionStatus::Denied,
            CameraBehavior::Capture | CameraBehavior::Cancel => PermissionStatus::Granted,
        };
        debug!(status = ?status, "Simulated permission request");
        Ok(status)
    }

    async fn launch_capture(&self, config: CaptureConfig) -> Result<CaptureOutcome, CaptureError> {
        debug!(quality = config.quality, "Simulated capture launch");
        match self.behavior {
            CameraBehavior::Capture => Ok(CaptureOutcome::Captured {
                asset_uri: format!("capture://{}.png", Uuid::new_v4()),
            }),
            CameraBehavior::Cancel | CameraBehavior::Deny => Ok(CaptureOutcome::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn capture_script_produces_asset_uri() {
        let camera = SimulatedCamera::new(CameraBehavior::Capture);

        assert_eq!(
            camera.request_permission().await.unwrap(),
            PermissionStatus::Granted
        );
        match camera.launch_capture(CaptureConfig::default()).await.unwrap() {
            CaptureOutcome::Captured { asset_uri } => {
                assert!(asset_uri.starts_with("capture://"));
                assert!(asset_uri.ends_with(".png"));
            }
            CaptureOutcome::Cancelled => panic!("expected a capture"),
        }
    }

    #[tokio::test]
    async fn deny_script_denies_permission() {
        let camera = SimulatedCamera::new(CameraBehavior::Deny);

        assert_eq!(
            camera.request_permission().await.unwrap(),
            PermissionStatus::Denied
        );
    }

    #[tokio::test]
    async fn cancel_script_cancels_capture() {
        let camera = SimulatedCamera::new(CameraBehavior::Cancel);

        assert_eq!(
            camera.launch_capture(CaptureConfig::default()).await.unwrap(),
            CaptureOutcome::Cancelled
        );
    }
}
