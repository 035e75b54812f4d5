//! Grid model for Dragon Radar.
//!
//! The cell matrix and the entity registries that index it.

pub use dragonradar_core as core;

pub mod grid;
pub mod registry;

// Re-export key types for convenience.
pub use grid::Grid;
pub use registry::EntityRegistry;
