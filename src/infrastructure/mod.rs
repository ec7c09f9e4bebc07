//! Infrastructure layer.

/// Simulated camera adapter.
pub mod capture;
/// Application configuration.
pub mod config;
/// Simulated password-reset adapter.
pub mod reset;
/// Hard-coded sample data.
pub mod samples;

pub use capture::SimulatedCamera;
pub use config::{AppConfig, CliArgs};
pub use reset::SimulatedResetClient;
