//! Layout: a populated grid together with its entity registries.
//!
//! Every `place_*` call writes the cell and the registry together, so a
//! layout built through this API never lets the two diverge.

use dragonradar_core::constants::FIRST_BALL_ID;
use dragonradar_core::enums::CellStatus;
use dragonradar_core::error::ConfigError;
use dragonradar_core::types::GridPos;
use dragonradar_grid::{EntityRegistry, Grid};

/// A grid plus the id → position index for each entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub balls: EntityRegistry,
    pub enemies: EntityRegistry,
    pub obstacles: EntityRegistry,
}

impl Layout {
    /// An empty `size`×`size` layout.
    pub fn empty(size: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            grid: Grid::new(size)?,
            balls: EntityRegistry::new(),
            enemies: EntityRegistry::new(),
            obstacles: EntityRegistry::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Put the next dragon ball at `pos`. Ball ids start at 1.
    pub fn place_ball(&mut self, pos: GridPos) -> u32 {
        let id = FIRST_BALL_ID + self.balls.len() as u32;
        self.occupy(pos, CellStatus::Ball);
        self.balls.insert(id, pos);
        id
    }

    /// Put the next enemy at `pos`. Enemy ids start at 0.
    pub fn place_enemy(&mut self, pos: GridPos) -> u32 {
        let id = self.enemies.len() as u32;
        self.occupy(pos, CellStatus::Enemy);
        self.enemies.insert(id, pos);
        id
    }

    /// Put the next obstacle at `pos`. Obstacle ids start at 0.
    pub fn place_obstacle(&mut self, pos: GridPos) -> u32 {
        let id = self.obstacles.len() as u32;
        self.occupy(pos, CellStatus::Obstacle);
        self.obstacles.insert(id, pos);
        id
    }

    /// Ball adjacency rule used while placing enemies and obstacles.
    ///
    /// True when some ball lies within Chebyshev distance 1 of `pos` and no
    /// ball sits off both of `pos`'s axes. With several balls scattered over
    /// the grid the second clause almost never holds.
    pub fn is_adjacent_to_ball(&self, pos: GridPos) -> bool {
        self.balls.positions().any(|b| pos.is_within_one(b))
            && !self.balls.positions().any(|b| pos.is_off_axis(b))
    }

    /// True when some enemy lies within Chebyshev distance 1 of `pos`.
    pub fn is_adjacent_to_enemy(&self, pos: GridPos) -> bool {
        self.enemies.positions().any(|e| pos.is_within_one(e))
    }

    /// Whether every entity cell has exactly one registry entry at the same
    /// coordinate and every registry entry points at a matching cell.
    pub fn is_consistent(&self) -> bool {
        let registries_match = self.balls.positions().all(|p| {
            matches!(
                self.grid.content_at(p),
                CellStatus::Ball | CellStatus::Collected
            )
        }) && self
            .enemies
            .positions()
            .all(|p| self.grid.content_at(p) == CellStatus::Enemy)
            && self
                .obstacles
                .positions()
                .all(|p| self.grid.content_at(p) == CellStatus::Obstacle);

        let cells_match = self.grid.iter().all(|(pos, status)| {
            let owners = [&self.balls, &self.enemies, &self.obstacles]
                .iter()
                .map(|reg| reg.positions().filter(|&p| p == pos).count())
                .sum::<usize>();
            if status.is_entity() {
                owners == 1
            } else {
                owners == 0
            }
        });

        registries_match && cells_match
    }

    fn occupy(&mut self, pos: GridPos, status: CellStatus) {
        assert!(
            self.grid.is_empty_at(pos),
            "cannot place {status:?} on occupied cell {pos}"
        );
        self.grid.set_content(pos, status);
    }
}
