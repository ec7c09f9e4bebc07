//! Application layer.

/// Use case implementations.
pub mod use_cases;
