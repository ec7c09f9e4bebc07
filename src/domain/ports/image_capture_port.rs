//! Image-capture port definition.

use async_trait::async_trait;

use crate::domain::errors::CaptureError;

/// Outcome of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Capture may proceed.
    Granted,
    /// The user refused access.
    Denied,
}

/// Configuration for a capture launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Allow cropping/editing before returning the asset.
    pub allow_editing: bool,
    /// Encoding quality, 0-100.
    pub quality: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            allow_editing: true,
            quality: 80,
        }
    }
}

/// Outcome of a capture launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The user backed out without taking a picture.
    Cancelled,
    /// A picture was taken.
    Captured {
        /// URI of the captured asset.
        asset_uri: String,
    },
}

/// Port for the image-capture capability.
#[async_trait]
pub trait ImageCapturePort: Send + Sync {
    /// Requests camera permission. Resolves once; no retry is attempted.
    async fn request_permission(&self) -> Result<PermissionStatus, CaptureError>;

    /// Launches the capture flow and waits for its single resolution.
    async fn launch_capture(&self, config: CaptureConfig) -> Result<CaptureOutcome, CaptureError>;
}
