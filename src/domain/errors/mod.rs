//! Domain error types.

mod capture_error;
mod reset_error;

pub use capture_error::CaptureError;
pub use reset_error::ResetError;
