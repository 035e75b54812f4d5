//! Driver configuration read from environment variables.

use std::env;

use thiserror::Error;

use dragonradar_core::difficulty::DifficultyProfile;
use dragonradar_core::enums::DifficultyLevel;
use dragonradar_core::error::ConfigError;
use dragonradar_sim::GameConfig;

/// Grid edge length.
pub const GRID_SIZE_VAR: &str = "DRAGONRADAR_GRID_SIZE";
/// `warrior`, `saiyajin` or `super-saiyajin`.
pub const DIFFICULTY_VAR: &str = "DRAGONRADAR_DIFFICULTY";
/// Optional placement seed.
pub const SEED_VAR: &str = "DRAGONRADAR_SEED";

/// Errors surfaced by the driver before or while running a game.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("invalid value `{value}` for {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Build a game config from the process environment.
pub fn from_env() -> Result<GameConfig, DriverError> {
    from_lookup(|var| env::var(var).ok())
}

/// Build a game config from any variable lookup. Unset variables fall back to
/// the defaults.
pub fn from_lookup<F>(lookup: F) -> Result<GameConfig, DriverError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let mut config = GameConfig::default();

    if let Some(value) = lookup(GRID_SIZE_VAR) {
        config.grid_size = value.trim().parse().map_err(|e: std::num::ParseIntError| {
            DriverError::InvalidEnv {
                var: GRID_SIZE_VAR,
                value: value.clone(),
                reason: e.to_string(),
            }
        })?;
    }

    if let Some(value) = lookup(DIFFICULTY_VAR) {
        let level: DifficultyLevel = value.parse().map_err(|reason| DriverError::InvalidEnv {
            var: DIFFICULTY_VAR,
            value: value.clone(),
            reason,
        })?;
        config.difficulty = DifficultyProfile::preset(level);
    }

    if let Some(value) = lookup(SEED_VAR) {
        let seed = value.trim().parse().map_err(|e: std::num::ParseIntError| {
            DriverError::InvalidEnv {
                var: SEED_VAR,
                value: value.clone(),
                reason: e.to_string(),
            }
        })?;
        config.seed = Some(seed);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(
        pairs: &'a [(&'static str, &'a str)],
    ) -> impl Fn(&'static str) -> Option<String> + 'a {
        move |var| {
            pairs
                .iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = from_lookup(|_| None).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_all_variables() {
        let pairs = [
            (GRID_SIZE_VAR, "16"),
            (DIFFICULTY_VAR, "super-saiyajin"),
            (SEED_VAR, " 42 "),
        ];
        let config = from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.difficulty.level, DifficultyLevel::SuperSaiyajin);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_grid_size() {
        let pairs = [(GRID_SIZE_VAR, "ten")];
        let err = from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(
            err,
            DriverError::InvalidEnv {
                var: GRID_SIZE_VAR,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_difficulty() {
        let pairs = [(DIFFICULTY_VAR, "namekian")];
        let err = from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(err.to_string().contains("namekian"));
    }
}
