//! Entity records.

mod appointment;
mod lab_result;
mod nurse;
mod prescription;
mod provider;
mod service;

pub use appointment::{Appointment, Doctor};
pub use lab_result::{LabMeasurement, LabResult};
pub use nurse::Nurse;
pub use prescription::Prescription;
pub use provider::Provider;
pub use service::NursingService;
