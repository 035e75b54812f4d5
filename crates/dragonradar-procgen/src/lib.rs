//! Procedural placement for Dragon Radar.
//!
//! Seeds a fresh grid with dragon balls, enemies and obstacles.
//! All randomness flows through a [`CoordinateSource`] so layouts are
//! reproducible under a seeded RNG or a scripted sequence.

pub use dragonradar_core as core;

pub mod layout;
pub mod placement;
pub mod source;

pub use layout::Layout;
pub use placement::generate;
pub use source::{CoordinateSource, RngSource, ScriptedSource};
