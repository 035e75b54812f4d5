//! Game engine for Dragon Radar.
//!
//! Owns the grid, the entity registries and the player, resolves movement
//! commands, and produces radar reports and `GameStateSnapshot`s.

pub mod engine;
pub mod radar;
pub mod snapshot;

pub use dragonradar_core as core;
pub use engine::{Encounter, GameConfig, GameEngine, MoveOutcome};
