//! Snapshot builder: reads the engine and produces a `GameStateSnapshot`.
//!
//! Read-only, it never modifies the engine.

use dragonradar_core::events::GameEvent;
use dragonradar_core::state::GameStateSnapshot;

use crate::engine::GameEngine;

/// Build a complete snapshot from the current engine state.
pub fn build_snapshot(engine: &GameEngine, events: Vec<GameEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        grid_size: engine.grid_size(),
        cells: engine.grid().to_rows(),
        player: engine.player_position(),
        player_energy: engine.player_energy(),
        dragon_balls_collected: engine.dragon_balls_collected(),
        dragon_ball_count: engine.dragon_ball_count(),
        phase: engine.phase(),
        difficulty: *engine.difficulty(),
        radar: engine.radar().clone(),
        events,
    }
}
