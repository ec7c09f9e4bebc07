//! Cuidado - a terminal client for healthcare appointments and home nursing.
//!
//! This crate provides a terminal front end for the Cuidado healthcare
//! catalog with clean architecture: appointment and provider browsing,
//! digital prescriptions, lab results, and home-nursing services.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases.
pub mod application;
/// Domain layer containing entities, registries, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters, configuration, and sample data.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "cuidado";
