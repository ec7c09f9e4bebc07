//! Prescription capture use case.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::Prescription;
use crate::domain::errors::CaptureError;
use crate::domain::ports::{CaptureConfig, CaptureOutcome, ImageCapturePort, PermissionStatus};

/// Outcome of a capture attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureResult {
    /// A new prescription record was produced.
    Added(Prescription),
    /// The user backed out; nothing changed.
    Cancelled,
}

/// Handles the scan-a-prescription workflow: permission, capture, record.
#[derive(Clone)]
pub struct CapturePrescriptionUseCase {
    capture_port: Arc<dyn ImageCapturePort>,
}

impl CapturePrescriptionUseCase {
    /// Creates a new capture use case.
    #[must_use]
    pub const fn new(capture_port: Arc<dyn ImageCapturePort>) -> Self {
        Self { capture_port }
    }

    /// Runs the capture flow once. Permission and capture each resolve a
    /// single time; there is no retry path.
    ///
    /// # Errors
    /// Returns `PermissionDenied` when the user refuses camera access, or an
    /// unexpected error from the capture layer.
    pub async fn execute(&self) -> Result<CaptureResult, CaptureError> {
        debug!("Requesting camera permission");
        match self.capture_port.request_permission().await? {
            PermissionStatus::Granted => {}
            PermissionStatus::Denied => {
                warn!("Camera permission denied");
                return Err(CaptureError::PermissionDenied);
            }
        }

        debug!("Launching capture");
        match self
            .capture_port
            .launch_capture(CaptureConfig::default())
            .await?
        {
            CaptureOutcome::Cancelled => {
                debug!("Capture cancelled by user");
                Ok(CaptureResult::Cancelled)
            }
            CaptureOutcome::Captured { asset_uri } => {
                let now = Utc::now();
                let prescription = Prescription::new(
                    Prescription::generate_id(now),
                    "Receta escaneada",
                    now,
                    Vec::new(),
                )
                .with_image(asset_uri);

                info!(id = %prescription.id, "Prescription captured");
                Ok(CaptureResult::Added(prescription))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockCaptureScript, MockImageCapture};

    #[tokio::test]
    async fn capture_produces_prepended_record() {
        let port = Arc::new(MockImageCapture::new(MockCaptureScript::Capture));
        let use_case = CapturePrescriptionUseCase::new(port.clone());

        let result = use_case.execute().await.unwrap();

        match result {
            CaptureResult::Added(rx) => {
                assert!(rx.id.starts_with("rx-"));
                assert_eq!(rx.image_uri.as_deref(), Some("capture://mock.png"));
            }
            CaptureResult::Cancelled => panic!("expected a captured record"),
        }
        assert_eq!(port.launch_count(), 1);
    }

    #[tokio::test]
    async fn denied_permission_stops_before_launch() {
        let port = Arc::new(MockImageCapture::new(MockCaptureScript::Deny));
        let use_case = CapturePrescriptionUseCase::new(port.clone());

        let result = use_case.execute().await;

        assert!(matches!(result, Err(CaptureError::PermissionDenied)));
        assert_eq!(port.launch_count(), 0);
    }

    #[tokio::test]
    async fn cancellation_is_not_an_error() {
        let port = Arc::new(MockImageCapture::new(MockCaptureScript::Cancel));
        let use_case = CapturePrescriptionUseCase::new(port);

        let result = use_case.execute().await.unwrap();

        assert_eq!(result, CaptureResult::Cancelled);
    }

    #[tokio::test]
    async fn unexpected_failure_is_propagated() {
        let port = Arc::new(MockImageCapture::new(MockCaptureScript::Fail));
        let use_case = CapturePrescriptionUseCase::new(port);

        let result = use_case.execute().await;

        assert!(matches!(result, Err(CaptureError::Unexpected { .. })));
    }
}
