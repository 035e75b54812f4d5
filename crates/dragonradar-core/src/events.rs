//! Events emitted by the engine for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, RejectReason};
use crate::types::GridPos;

/// Something notable that happened while resolving a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A dragon ball was picked up.
    BallCollected {
        ball_id: u32,
        position: GridPos,
        collected: usize,
    },
    /// The player stepped onto an enemy.
    EnemyEncountered {
        enemy_id: u32,
        position: GridPos,
        energy_lost: i32,
        energy_left: i32,
    },
    /// A move was refused and the player stayed put.
    MoveRejected {
        direction: Direction,
        reason: RejectReason,
    },
    /// The last dragon ball was collected.
    AllBallsCollected,
}
