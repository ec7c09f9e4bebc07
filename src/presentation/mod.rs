//! Presentation layer.

/// Terminal event handling.
pub mod events;
/// Color theme and icon glyphs.
pub mod theme;
/// Screens and application orchestrator.
pub mod ui;
/// Reusable widgets and entity cards.
pub mod widgets;

pub use ui::App;
