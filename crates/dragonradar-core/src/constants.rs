//! Game constants and tuning parameters.

// --- Grid ---

/// Smallest accepted grid edge length.
pub const MIN_GRID_SIZE: usize = 10;

/// Largest accepted grid edge length.
pub const MAX_GRID_SIZE: usize = 1000;

/// Grid edge length used when no size is configured.
pub const DEFAULT_GRID_SIZE: usize = 10;

// --- Dragon balls ---

/// Number of dragon balls placed on every grid.
pub const DRAGON_BALL_COUNT: usize = 7;

/// Identifier of the first dragon ball. Ids run `1..=DRAGON_BALL_COUNT`.
pub const FIRST_BALL_ID: u32 = 1;

// --- Player ---

/// Energy the player starts every game with.
pub const STARTING_ENERGY: i32 = 100;

// --- Difficulty: Warrior (default) ---

/// Grid area divisor giving the maximum enemy count.
pub const WARRIOR_ENEMY_DENSITY: u32 = 10;

/// Energy lost when stepping onto an enemy.
pub const WARRIOR_ENEMY_POWER: i32 = 2;

/// Grid area divisor giving the maximum obstacle count.
pub const WARRIOR_OBSTACLES_DENSITY: u32 = 10;

// --- Difficulty: Saiyajin ---

pub const SAIYAJIN_ENEMY_DENSITY: u32 = 8;
pub const SAIYAJIN_ENEMY_POWER: i32 = 4;
pub const SAIYAJIN_OBSTACLES_DENSITY: u32 = 9;

// --- Difficulty: Super Saiyajin ---

pub const SUPER_SAIYAJIN_ENEMY_DENSITY: u32 = 6;
pub const SUPER_SAIYAJIN_ENEMY_POWER: i32 = 6;
pub const SUPER_SAIYAJIN_OBSTACLES_DENSITY: u32 = 8;
