//! Fundamental grid coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// A cell coordinate on the grid, 0-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Center cell of a `size`×`size` grid.
    pub fn center(size: usize) -> Self {
        Self::new(size / 2, size / 2)
    }

    /// Neighbor one step away in `direction`.
    /// Returns None if that step would leave a `size`×`size` grid.
    pub fn step(self, direction: Direction, size: usize) -> Option<GridPos> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(GridPos { row, col })
    }

    /// Absolute row distance.
    pub fn row_distance(self, other: GridPos) -> usize {
        self.row.abs_diff(other.row)
    }

    /// Absolute column distance.
    pub fn col_distance(self, other: GridPos) -> usize {
        self.col.abs_diff(other.col)
    }

    /// True when `other` lies within Chebyshev distance 1 (including `self`).
    pub fn is_within_one(self, other: GridPos) -> bool {
        self.row_distance(other) <= 1 && self.col_distance(other) <= 1
    }

    /// True when `other` differs from `self` in both row and column.
    pub fn is_off_axis(self, other: GridPos) -> bool {
        self.row != other.row && self.col != other.col
    }

    /// Direction along the row axis that leads from `self` to `other`.
    pub fn row_direction_to(self, other: GridPos) -> Option<Direction> {
        match other.row.cmp(&self.row) {
            std::cmp::Ordering::Greater => Some(Direction::Down),
            std::cmp::Ordering::Less => Some(Direction::Up),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Direction along the column axis that leads from `self` to `other`.
    pub fn col_direction_to(self, other: GridPos) -> Option<Direction> {
        match other.col.cmp(&self.col) {
            std::cmp::Ordering::Greater => Some(Direction::Right),
            std::cmp::Ordering::Less => Some(Direction::Left),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
