//! Game state snapshot and radar report: the visible state handed to a
//! presentation layer after each command.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::difficulty::DifficultyProfile;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::GridPos;

/// Complete game state for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub grid_size: usize,
    /// Cell contents, one `Vec` per row.
    pub cells: Vec<Vec<CellStatus>>,
    pub player: GridPos,
    pub player_energy: i32,
    pub dragon_balls_collected: usize,
    pub dragon_ball_count: usize,
    pub phase: GamePhase,
    pub difficulty: DifficultyProfile,
    pub radar: RadarReport,
    /// Events produced since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// Radar telemetry: where every dragon ball lies relative to the player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarReport {
    pub player: GridPos,
    pub player_energy: i32,
    /// Readings keyed by ball id.
    pub readings: BTreeMap<u32, RadarReading>,
}

/// Distance and heading to a single dragon ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarReading {
    /// `|player.row - ball.row|`.
    pub row_distance: usize,
    /// `|player.col - ball.col|`.
    pub col_distance: usize,
    /// Up or Down, None when on the same row.
    pub row_direction: Option<Direction>,
    /// Left or Right, None when in the same column.
    pub col_direction: Option<Direction>,
    /// Whether the ball has already been picked up.
    pub collected: bool,
}

impl RadarReading {
    /// Reading from `player` toward a ball at `ball`.
    pub fn between(player: GridPos, ball: GridPos, collected: bool) -> Self {
        Self {
            row_distance: player.row_distance(ball),
            col_distance: player.col_distance(ball),
            row_direction: player.row_direction_to(ball),
            col_direction: player.col_direction_to(ball),
            collected,
        }
    }

    /// Sum of both axis distances.
    pub fn manhattan(&self) -> usize {
        self.row_distance + self.col_distance
    }
}

impl RadarReport {
    /// Reading for a given ball id.
    pub fn reading(&self, ball_id: u32) -> Option<&RadarReading> {
        self.readings.get(&ball_id)
    }

    /// Closest ball not yet collected, by Manhattan distance.
    pub fn nearest_uncollected(&self) -> Option<(u32, &RadarReading)> {
        self.readings
            .iter()
            .filter(|(_, r)| !r.collected)
            .min_by_key(|(_, r)| r.manhattan())
            .map(|(id, r)| (*id, r))
    }
}
