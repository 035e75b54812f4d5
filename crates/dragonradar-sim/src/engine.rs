//! Game engine: the only mutable runtime component.
//!
//! `GameEngine` owns the grid and registries, tracks the player's position,
//! energy and collected balls, and resolves one command at a time. Completely
//! headless, enabling deterministic testing.

use log::{info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dragonradar_core::commands::PlayerCommand;
use dragonradar_core::constants::{DEFAULT_GRID_SIZE, DRAGON_BALL_COUNT, STARTING_ENERGY};
use dragonradar_core::difficulty::DifficultyProfile;
use dragonradar_core::enums::{CellStatus, Direction, GamePhase, RejectReason};
use dragonradar_core::error::ConfigError;
use dragonradar_core::events::GameEvent;
use dragonradar_core::state::{GameStateSnapshot, RadarReport};
use dragonradar_core::types::GridPos;
use dragonradar_grid::{EntityRegistry, Grid};
use dragonradar_procgen::{CoordinateSource, Layout, RngSource};

use crate::{radar, snapshot};

/// Configuration for starting a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Edge length of the square grid. At least 10.
    pub grid_size: usize,
    pub difficulty: DifficultyProfile,
    /// RNG seed for placement. Same seed = same layout. None draws from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            difficulty: DifficultyProfile::default(),
            seed: None,
        }
    }
}

/// Result of a single `move_player` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player stepped onto `to`.
    Moved { to: GridPos, encounter: Encounter },
    /// The player stayed put.
    Rejected(RejectReason),
}

/// What the player found on the destination cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encounter {
    /// Empty or already collected.
    Nothing,
    BallCollected { ball_id: u32 },
    Enemy { enemy_id: u32, energy_lost: i32 },
}

/// The game engine. Owns the grid, the registries and all player state.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    balls: EntityRegistry,
    enemies: EntityRegistry,
    obstacles: EntityRegistry,
    difficulty: DifficultyProfile,
    player: GridPos,
    player_energy: i32,
    dragon_balls_collected: usize,
    radar: RadarReport,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new game with a randomly generated layout.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_source(
            config.grid_size,
            config.difficulty,
            &mut RngSource::new(rng),
        )
    }

    /// Create a new game, drawing placement coordinates from `source`.
    pub fn with_source<S>(
        grid_size: usize,
        difficulty: DifficultyProfile,
        source: &mut S,
    ) -> Result<Self, ConfigError>
    where
        S: CoordinateSource + ?Sized,
    {
        let layout = dragonradar_procgen::generate(grid_size, &difficulty, source)?;
        Self::from_layout(layout, difficulty)
    }

    /// Create a new game on a prepared layout.
    pub fn from_layout(layout: Layout, difficulty: DifficultyProfile) -> Result<Self, ConfigError> {
        if layout.balls.len() != DRAGON_BALL_COUNT {
            return Err(ConfigError::BallCount {
                expected: DRAGON_BALL_COUNT,
                found: layout.balls.len(),
            });
        }
        if !layout.is_consistent() {
            return Err(ConfigError::InconsistentLayout);
        }

        let Layout {
            grid,
            balls,
            enemies,
            obstacles,
        } = layout;
        let player = GridPos::center(grid.size());

        let mut engine = Self {
            grid,
            balls,
            enemies,
            obstacles,
            difficulty,
            player,
            player_energy: STARTING_ENERGY,
            dragon_balls_collected: 0,
            radar: RadarReport::default(),
            events: Vec::new(),
        };
        engine.update_radar();

        info!(
            "new {0}x{0} game ({1:?}): {2} enemies, {3} obstacles, player at {4}",
            engine.grid.size(),
            difficulty.level,
            engine.enemies.len(),
            engine.obstacles.len(),
            player
        );
        Ok(engine)
    }

    /// Handle a single player command and return the resulting snapshot.
    pub fn handle_command(&mut self, command: PlayerCommand) -> GameStateSnapshot {
        match command {
            PlayerCommand::Move { direction } => {
                self.move_player(direction);
            }
        }
        self.take_snapshot()
    }

    /// Try to move the player one cell.
    ///
    /// Off-grid steps and steps into obstacles are refused without any state
    /// change. The radar report is refreshed either way. Pending events are
    /// replaced by the events of this move.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        self.events.clear();
        let outcome = match self.player.step(direction, self.grid.size()) {
            None => self.reject(direction, RejectReason::OutOfBounds),
            Some(target) if self.grid.content_at(target) == CellStatus::Obstacle => {
                self.reject(direction, RejectReason::Obstacle)
            }
            Some(target) => {
                self.player = target;
                let encounter = self.resolve_cell(target);
                trace!("moved {direction} to {target}: {encounter:?}");
                MoveOutcome::Moved {
                    to: target,
                    encounter,
                }
            }
        };
        self.update_radar();
        outcome
    }

    /// True once every dragon ball has been collected. Stays true.
    pub fn is_game_over(&self) -> bool {
        self.dragon_balls_collected == DRAGON_BALL_COUNT
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_game_over() {
            GamePhase::Won
        } else {
            GamePhase::Active
        }
    }

    /// Whether the player should be drawn at `pos`.
    pub fn should_render_player(&self, pos: GridPos) -> bool {
        self.player == pos
    }

    /// Content of the cell at `pos`. Panics if `pos` is off the grid.
    pub fn grid_content_at(&self, pos: GridPos) -> CellStatus {
        self.grid.content_at(pos)
    }

    pub fn player_position(&self) -> GridPos {
        self.player
    }

    pub fn player_energy(&self) -> i32 {
        self.player_energy
    }

    pub fn dragon_balls_collected(&self) -> usize {
        self.dragon_balls_collected
    }

    pub fn dragon_ball_count(&self) -> usize {
        DRAGON_BALL_COUNT
    }

    pub fn difficulty(&self) -> &DifficultyProfile {
        &self.difficulty
    }

    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn balls(&self) -> &EntityRegistry {
        &self.balls
    }

    pub fn enemies(&self) -> &EntityRegistry {
        &self.enemies
    }

    pub fn obstacles(&self) -> &EntityRegistry {
        &self.obstacles
    }

    /// Radar report computed after the most recent move (or at construction).
    pub fn radar(&self) -> &RadarReport {
        &self.radar
    }

    /// Events produced by the latest move, unless a snapshot already took them.
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn take_snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(self, events)
    }

    fn reject(&mut self, direction: Direction, reason: RejectReason) -> MoveOutcome {
        trace!("move {direction} from {} rejected: {reason:?}", self.player);
        self.events
            .push(GameEvent::MoveRejected { direction, reason });
        MoveOutcome::Rejected(reason)
    }

    /// Apply the effect of the cell the player just entered.
    fn resolve_cell(&mut self, pos: GridPos) -> Encounter {
        match self.grid.content_at(pos) {
            CellStatus::Ball => self.collect_ball(pos),
            CellStatus::Enemy => self.hit_enemy(pos),
            CellStatus::Empty | CellStatus::Collected | CellStatus::Obstacle => {
                Encounter::Nothing
            }
        }
    }

    fn collect_ball(&mut self, pos: GridPos) -> Encounter {
        let ball_id = self
            .balls
            .id_at(pos)
            .expect("ball cell without a registry entry");

        self.grid.set_content(pos, CellStatus::Collected);
        self.dragon_balls_collected += 1;
        self.events.push(GameEvent::BallCollected {
            ball_id,
            position: pos,
            collected: self.dragon_balls_collected,
        });
        info!(
            "dragon ball {ball_id} collected ({}/{DRAGON_BALL_COUNT})",
            self.dragon_balls_collected
        );

        if self.dragon_balls_collected == DRAGON_BALL_COUNT {
            self.events.push(GameEvent::AllBallsCollected);
            info!("all dragon balls collected, energy left: {}", self.player_energy);
        }

        Encounter::BallCollected { ball_id }
    }

    fn hit_enemy(&mut self, pos: GridPos) -> Encounter {
        let enemy_id = self
            .enemies
            .id_at(pos)
            .expect("enemy cell without a registry entry");
        let energy_lost = self.difficulty.enemy_power;

        // No floor: energy may go negative.
        self.player_energy -= energy_lost;
        self.events.push(GameEvent::EnemyEncountered {
            enemy_id,
            position: pos,
            energy_lost,
            energy_left: self.player_energy,
        });

        Encounter::Enemy {
            enemy_id,
            energy_lost,
        }
    }

    fn update_radar(&mut self) {
        self.radar = radar::build_report(self.player, self.player_energy, &self.balls, &self.grid);
    }
}
