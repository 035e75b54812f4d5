//! Configuration errors raised while building a game.

use thiserror::Error;

use crate::constants::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// A game could not be constructed from the supplied configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least {min}x{min}, got {size}")]
    GridTooSmall { size: usize, min: usize },

    #[error("grid size must be at most {max}x{max}, got {size}")]
    GridTooLarge { size: usize, max: usize },

    #[error("difficulty field `{field}` must be non-zero")]
    ZeroDensity { field: &'static str },

    #[error("a {size}x{size} grid cannot hold {required} entities")]
    Overcrowded { size: usize, required: usize },

    #[error("a game needs exactly {expected} dragon balls, layout has {found}")]
    BallCount { expected: usize, found: usize },

    #[error("layout grid and entity registries disagree")]
    InconsistentLayout,
}

/// Check that `size` is an accepted grid edge length.
pub fn check_grid_size(size: usize) -> Result<(), ConfigError> {
    if size < MIN_GRID_SIZE {
        return Err(ConfigError::GridTooSmall {
            size,
            min: MIN_GRID_SIZE,
        });
    }
    if size > MAX_GRID_SIZE {
        return Err(ConfigError::GridTooLarge {
            size,
            max: MAX_GRID_SIZE,
        });
    }
    Ok(())
}
