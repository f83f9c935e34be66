//! Derived win-check lines.
//!
//! Lines are views: they are recomputed from the live board on demand and
//! never stored, so they always reflect current occupancy.

use super::cell::{CellRef, CellState, Marker};
use serde::Serialize;

/// Which way a line runs across the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    Row,
    Column,
    /// Top-left to bottom-right.
    DiagonalMain,
    /// Top-right to bottom-left.
    DiagonalAnti,
}

impl Orientation {
    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Row => "Row",
            Orientation::Column => "Column",
            Orientation::DiagonalMain => "DiagonalMain",
            Orientation::DiagonalAnti => "DiagonalAnti",
        }
    }
}

/// Number of lines on a 3x3 board.
pub const LINE_COUNT: usize = 8;

// Rows and columns interleave (row 0, column 0, row 1, ...), then the two
// diagonals. "First matching line" semantics depend on this order.
pub(crate) const LINE_LAYOUT: [(Orientation, [CellRef; 3]); LINE_COUNT] = [
    (
        Orientation::Row,
        [CellRef::at(0, 0), CellRef::at(0, 1), CellRef::at(0, 2)],
    ),
    (
        Orientation::Column,
        [CellRef::at(0, 0), CellRef::at(1, 0), CellRef::at(2, 0)],
    ),
    (
        Orientation::Row,
        [CellRef::at(1, 0), CellRef::at(1, 1), CellRef::at(1, 2)],
    ),
    (
        Orientation::Column,
        [CellRef::at(0, 1), CellRef::at(1, 1), CellRef::at(2, 1)],
    ),
    (
        Orientation::Row,
        [CellRef::at(2, 0), CellRef::at(2, 1), CellRef::at(2, 2)],
    ),
    (
        Orientation::Column,
        [CellRef::at(0, 2), CellRef::at(1, 2), CellRef::at(2, 2)],
    ),
    (
        Orientation::DiagonalMain,
        [CellRef::at(0, 0), CellRef::at(1, 1), CellRef::at(2, 2)],
    ),
    (
        Orientation::DiagonalAnti,
        [CellRef::at(0, 2), CellRef::at(1, 1), CellRef::at(2, 0)],
    ),
];

/// Three cells of the board, in order, with their occupancy at the time
/// the line was derived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Line {
    orientation: Orientation,
    cells: [CellRef; 3],
    states: [CellState; 3],
}

impl Line {
    pub(crate) fn new(orientation: Orientation, cells: [CellRef; 3], states: [CellState; 3]) -> Self {
        Self {
            orientation,
            cells,
            states,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn cells(&self) -> &[CellRef; 3] {
        &self.cells
    }

    pub fn states(&self) -> &[CellState; 3] {
        &self.states
    }

    /// Cells paired with their occupancy.
    pub fn entries(&self) -> impl Iterator<Item = (CellRef, CellState)> + '_ {
        self.cells.iter().copied().zip(self.states.iter().copied())
    }

    /// Cells of this line that are still empty.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellRef> + '_ {
        self.entries()
            .filter(|(_, state)| state.is_empty())
            .map(|(cell, _)| cell)
    }

    pub fn count_held_by(&self, marker: Marker) -> usize {
        self.states.iter().filter(|s| s.is_held_by(marker)).count()
    }

    pub fn count_empty(&self) -> usize {
        self.states.iter().filter(|s| s.is_empty()).count()
    }
}
