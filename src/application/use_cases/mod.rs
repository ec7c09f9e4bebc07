//! Use cases.

mod capture_prescription_use_case;
mod request_reset_use_case;

pub use capture_prescription_use_case::{CapturePrescriptionUseCase, CaptureResult};
pub use request_reset_use_case::RequestResetUseCase;
