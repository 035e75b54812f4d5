//! Enumeration types used throughout the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Content classification of a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Empty,
    /// An uncollected dragon ball.
    Ball,
    /// An enemy. Stepping on it drains energy.
    Enemy,
    /// A blocked cell the player cannot enter.
    Obstacle,
    /// A dragon ball that has already been picked up.
    Collected,
}

impl CellStatus {
    /// Whether this cell holds an entity that must have a registry entry.
    pub fn is_entity(self) -> bool {
        matches!(
            self,
            CellStatus::Ball | CellStatus::Enemy | CellStatus::Obstacle | CellStatus::Collected
        )
    }
}

/// Movement and compass direction on the grid.
///
/// Rows grow downward and columns grow to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Row - 1.
    Up,
    /// Row + 1.
    Down,
    /// Column - 1.
    Left,
    /// Column + 1.
    Right,
}

impl Direction {
    /// Signed (row, col) offset of a single step.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

/// Preset difficulty level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    #[default]
    Warrior,
    Saiyajin,
    SuperSaiyajin,
}

impl FromStr for DifficultyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "warrior" => Ok(DifficultyLevel::Warrior),
            "saiyajin" => Ok(DifficultyLevel::Saiyajin),
            "super-saiyajin" | "supersaiyajin" => Ok(DifficultyLevel::SuperSaiyajin),
            other => Err(format!("unknown difficulty level `{other}`")),
        }
    }
}

/// Top-level game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Dragon balls remain to be collected.
    #[default]
    Active,
    /// All dragon balls collected. Permanent once reached.
    Won,
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The step would leave the grid.
    OutOfBounds,
    /// The target cell is an obstacle.
    Obstacle,
}
