//! Difficulty profiles.
//!
//! A profile is immutable configuration. Densities divide the grid area to
//! give the maximum number of enemies and obstacles a game may hold.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::DifficultyLevel;
use crate::error::{check_grid_size, ConfigError};

/// Enemy and obstacle tuning for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub level: DifficultyLevel,
    /// Grid area divisor for the maximum enemy count.
    pub enemy_density: u32,
    /// Energy lost per enemy encounter.
    pub enemy_power: i32,
    /// Grid area divisor for the maximum obstacle count.
    pub obstacles_density: u32,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::preset(DifficultyLevel::Warrior)
    }
}

impl DifficultyProfile {
    /// Get the preset profile for a given level.
    pub fn preset(level: DifficultyLevel) -> Self {
        match level {
            DifficultyLevel::Warrior => Self {
                level,
                enemy_density: WARRIOR_ENEMY_DENSITY,
                enemy_power: WARRIOR_ENEMY_POWER,
                obstacles_density: WARRIOR_OBSTACLES_DENSITY,
            },
            DifficultyLevel::Saiyajin => Self {
                level,
                enemy_density: SAIYAJIN_ENEMY_DENSITY,
                enemy_power: SAIYAJIN_ENEMY_POWER,
                obstacles_density: SAIYAJIN_OBSTACLES_DENSITY,
            },
            DifficultyLevel::SuperSaiyajin => Self {
                level,
                enemy_density: SUPER_SAIYAJIN_ENEMY_DENSITY,
                enemy_power: SUPER_SAIYAJIN_ENEMY_POWER,
                obstacles_density: SUPER_SAIYAJIN_OBSTACLES_DENSITY,
            },
        }
    }

    /// Upper bound on enemies for a `grid_size`×`grid_size` grid. Never below 1.
    pub fn max_enemies(&self, grid_size: usize) -> usize {
        max_count(grid_size, self.enemy_density)
    }

    /// Upper bound on obstacles for a `grid_size`×`grid_size` grid. Never below 1.
    pub fn max_obstacles(&self, grid_size: usize) -> usize {
        max_count(grid_size, self.obstacles_density)
    }

    /// Check that this profile can populate a grid of the given size.
    pub fn validate(&self, grid_size: usize) -> Result<(), ConfigError> {
        check_grid_size(grid_size)?;
        if self.enemy_density == 0 {
            return Err(ConfigError::ZeroDensity {
                field: "enemy_density",
            });
        }
        if self.obstacles_density == 0 {
            return Err(ConfigError::ZeroDensity {
                field: "obstacles_density",
            });
        }

        let required =
            DRAGON_BALL_COUNT + self.max_enemies(grid_size) + self.max_obstacles(grid_size);
        if required > grid_size * grid_size {
            return Err(ConfigError::Overcrowded {
                size: grid_size,
                required,
            });
        }
        Ok(())
    }
}

fn max_count(grid_size: usize, density: u32) -> usize {
    let density = density.max(1) as usize;
    (grid_size * grid_size / density).max(1)
}
