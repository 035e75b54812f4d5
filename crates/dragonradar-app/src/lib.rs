//! Dragon Radar terminal driver.
//!
//! Wires the engine to a line-oriented terminal: reads directional commands,
//! renders the board as text and prints radar telemetry.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod render;

pub use dragonradar_core as core;
