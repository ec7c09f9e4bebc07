//! Capability ports.

mod image_capture_port;
mod password_reset_port;

pub use image_capture_port::{
    CaptureConfig, CaptureOutcome, ImageCapturePort, PermissionStatus,
};
pub use password_reset_port::PasswordResetPort;
