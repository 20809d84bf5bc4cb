//! The game board.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{Cell, Coord, BOARD_SIZE};
use crate::core::{EngineError, Player};

/// Fixed-size N x N board.
///
/// Boards are value types. Cells live in an `im::Vector`, so `clone()` is
/// O(1) and a later write to either copy never shows through the other.
/// Dimensions never change after creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create an empty board of the given size.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be positive");
        Self {
            size,
            cells: std::iter::repeat(Cell::Empty).take(size * size).collect(),
        }
    }

    /// Create an empty standard 15x15 board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(BOARD_SIZE)
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a coordinate lies on the board.
    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Bounds-checked read.
    pub fn get(&self, coord: Coord) -> Result<Cell, EngineError> {
        if self.contains(coord) {
            Ok(self.at(coord))
        } else {
            Err(EngineError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.size,
            })
        }
    }

    /// Read a coordinate already known to be in bounds.
    #[inline]
    pub(crate) fn at(&self, coord: Coord) -> Cell {
        debug_assert!(self.contains(coord));
        self.cells[self.index(coord)]
    }

    /// Check if an in-bounds coordinate is empty. Off-board is never empty.
    #[inline]
    #[must_use]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.contains(coord) && self.at(coord).is_empty()
    }

    /// Return a copy with the player's stone written at `coord`.
    ///
    /// The caller has already checked the cell is empty and that it is
    /// this player's turn; the board enforces neither.
    #[must_use]
    pub fn place(&self, coord: Coord, player: Player) -> Board {
        let mut next = self.clone();
        next.set(coord, Cell::from(player));
        next
    }

    /// Write a cell in place.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        debug_assert!(self.contains(coord));
        let idx = self.index(coord);
        self.cells.set(idx, cell);
    }

    /// A copy with every black stone turned white and vice versa.
    #[must_use]
    pub fn swapped_colors(&self) -> Board {
        Board {
            size: self.size,
            cells: self.cells.iter().map(|c| c.swapped()).collect(),
        }
    }

    /// Iterate over (coord, cell) pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i / size, i % size), cell))
    }

    /// All empty coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter().filter(|(_, c)| c.is_empty()).map(|(coord, _)| coord)
    }

    /// Number of stones of either color.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of stones belonging to one player.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    #[must_use]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Row-indexed text grid: `[r] c c c ...` with 0 empty, 1 black, 2 white.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            write!(f, "[{}]", row)?;
            for col in 0..self.size {
                write!(f, " {}", self.at(Coord::new(row, col)).code())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
