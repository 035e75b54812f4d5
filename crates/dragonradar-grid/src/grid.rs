//! Grid: the N×N cell matrix with content queries.

use dragonradar_core::enums::CellStatus;
use dragonradar_core::error::{check_grid_size, ConfigError};
use dragonradar_core::types::GridPos;

/// Square matrix of cell contents, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellStatus>,
}

impl Grid {
    /// Create an all-empty `size`×`size` grid.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        check_grid_size(size)?;
        Ok(Self {
            size,
            cells: vec![CellStatus::Empty; size * size],
        })
    }

    /// Edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on the grid.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Content of the cell at `pos`.
    ///
    /// Panics if `pos` is off the grid.
    pub fn content_at(&self, pos: GridPos) -> CellStatus {
        self.cells[self.index(pos)]
    }

    /// Replace the content of the cell at `pos`.
    ///
    /// Panics if `pos` is off the grid.
    pub fn set_content(&mut self, pos: GridPos, status: CellStatus) {
        let idx = self.index(pos);
        self.cells[idx] = status;
    }

    /// Whether the cell at `pos` is empty.
    pub fn is_empty_at(&self, pos: GridPos) -> bool {
        self.content_at(pos) == CellStatus::Empty
    }

    /// Number of cells holding `status`.
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|&&c| c == status).count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellStatus]> {
        self.cells.chunks(self.size)
    }

    /// Every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, CellStatus)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (GridPos::new(i / self.size, i % self.size), c))
    }

    /// Owned copy of the rows, for snapshots.
    pub fn to_rows(&self) -> Vec<Vec<CellStatus>> {
        self.rows().map(<[CellStatus]>::to_vec).collect()
    }

    fn index(&self, pos: GridPos) -> usize {
        assert!(
            self.contains(pos),
            "cell {pos} is outside the {0}x{0} grid",
            self.size
        );
        pos.row * self.size + pos.col
    }
}
