//! Core types and definitions for the Dragon Radar engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! coordinates, cell and direction enums, difficulty profiles, commands,
//! events, state snapshots, and constants.
//! It has no dependency on any rendering or runtime framework.

pub mod commands;
pub mod constants;
pub mod difficulty;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
