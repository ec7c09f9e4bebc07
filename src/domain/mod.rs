//! Domain layer.

/// Entity records rendered by the presentation layer.
pub mod entities;
/// Domain error types.
pub mod errors;
/// Port definitions for external capabilities.
pub mod ports;
/// Display-metadata registries for status and type keys.
pub mod registry;
