//! The 3x3 board.
//!
//! The board is plain data. It enforces one invariant itself: a cell goes
//! from `Empty` to `Occupied` exactly once and is never overwritten.

use super::cell::{CellRef, CellState, Marker, SIZE};
use super::error::BoardError;
use super::line::{Line, LINE_COUNT, LINE_LAYOUT};
use serde::Serialize;
use std::fmt;

/// 3x3 grid of cell states.
///
/// Cloning a board produces an independent deep copy; this is what
/// observers receive as a snapshot.
///
/// # Example
///
/// ```rust
/// use tictac::core::{Board, CellState, Marker};
///
/// let mut board = Board::new();
/// board.place(1, 1, Marker::X).unwrap();
///
/// assert_eq!(board.cell_by_id(5).unwrap(), CellState::Occupied(Marker::X));
/// assert!(board.place(1, 1, Marker::O).is_err());
/// assert!(!board.is_full());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [[CellState; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// State of the cell at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        let cell = CellRef::new(row, col)?;
        Ok(self.cell(cell))
    }

    /// State of the cell with 1-based id `id`.
    pub fn cell_by_id(&self, id: usize) -> Result<CellState, BoardError> {
        let cell = CellRef::from_id(id)?;
        Ok(self.cell(cell))
    }

    /// State of an already-validated cell.
    pub fn cell(&self, cell: CellRef) -> CellState {
        self.cells[cell.row()][cell.col()]
    }

    /// True iff `(row, col)` is on the board and empty.
    pub fn is_available(&self, row: usize, col: usize) -> bool {
        self.cell_at(row, col)
            .map(|state| state.is_empty())
            .unwrap_or(false)
    }

    /// Place `marker` at `(row, col)`.
    ///
    /// Fails without touching the board if the coordinates are out of
    /// range or the cell is already occupied.
    pub fn place(&mut self, row: usize, col: usize, marker: Marker) -> Result<CellRef, BoardError> {
        let cell = CellRef::new(row, col)?;
        self.place_at(cell, marker)?;
        Ok(cell)
    }

    /// Place `marker` in an already-validated cell.
    pub fn place_at(&mut self, cell: CellRef, marker: Marker) -> Result<(), BoardError> {
        let slot = &mut self.cells[cell.row()][cell.col()];
        if let CellState::Occupied(occupant) = *slot {
            return Err(BoardError::CellOccupied {
                row: cell.row(),
                col: cell.col(),
                occupant,
            });
        }
        *slot = CellState::Occupied(marker);
        Ok(())
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|state| !state.is_empty())
    }

    /// Cells that are still empty, in row-major order.
    pub fn empty_cells(&self) -> Vec<CellRef> {
        CellRef::all().filter(|c| self.cell(*c).is_empty()).collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|s| !s.is_empty()).count()
    }

    /// The eight lines, derived from the current occupancy.
    ///
    /// Order is fixed: row 0, column 0, row 1, column 1, row 2, column 2,
    /// main diagonal, anti-diagonal.
    pub fn all_lines(&self) -> [Line; LINE_COUNT] {
        LINE_LAYOUT.map(|(orientation, cells)| {
            Line::new(orientation, cells, cells.map(|cell| self.cell(cell)))
        })
    }

    /// Rows of cell states, top to bottom.
    pub fn rows(&self) -> &[[CellState; SIZE]; SIZE] {
        &self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, state) in cells.iter().enumerate() {
                match state {
                    CellState::Occupied(marker) => write!(f, "{marker}")?,
                    CellState::Empty => write!(f, "{}", SIZE * row + col + 1)?,
                }
                if col < SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if row < SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::line::Orientation;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().len(), 9);
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn place_then_read_back_by_both_addresses() {
        let mut board = Board::new();
        let cell = board.place(2, 0, Marker::O).unwrap();

        assert_eq!(cell.id(), 7);
        assert_eq!(board.cell_at(2, 0), Ok(CellState::Occupied(Marker::O)));
        assert_eq!(board.cell_by_id(7), Ok(CellState::Occupied(Marker::O)));
        assert!(!board.is_available(2, 0));
    }

    #[test]
    fn place_never_overwrites() {
        let mut board = Board::new();
        board.place(0, 0, Marker::X).unwrap();

        let result = board.place(0, 0, Marker::O);

        assert_eq!(
            result,
            Err(BoardError::CellOccupied {
                row: 0,
                col: 0,
                occupant: Marker::X
            })
        );
        assert_eq!(board.cell_at(0, 0), Ok(CellState::Occupied(Marker::X)));
    }

    #[test]
    fn out_of_range_place_leaves_board_untouched() {
        let mut board = Board::new();
        assert_eq!(
            board.place(3, 3, Marker::X),
            Err(BoardError::OutOfRange { row: 3, col: 3 })
        );
        assert_eq!(board, Board::new());
        assert!(!board.is_available(5, 0));
    }

    #[test]
    fn cell_by_id_rejects_invalid_ids() {
        let board = Board::new();
        assert_eq!(board.cell_by_id(0), Err(BoardError::InvalidId(0)));
        assert_eq!(board.cell_by_id(10), Err(BoardError::InvalidId(10)));
    }

    #[test]
    fn full_board_is_detected() {
        let mut board = Board::new();
        for (i, cell) in CellRef::all().enumerate() {
            let marker = if i % 2 == 0 { Marker::X } else { Marker::O };
            board.place_at(cell, marker).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn lines_follow_fixed_order() {
        let board = Board::new();
        let orientations: Vec<_> = board.all_lines().iter().map(|l| l.orientation()).collect();

        assert_eq!(
            orientations,
            vec![
                Orientation::Row,
                Orientation::Column,
                Orientation::Row,
                Orientation::Column,
                Orientation::Row,
                Orientation::Column,
                Orientation::DiagonalMain,
                Orientation::DiagonalAnti,
            ]
        );
    }

    #[test]
    fn lines_reflect_live_occupancy() {
        let mut board = Board::new();
        board.place(1, 1, Marker::X).unwrap();

        let lines = board.all_lines();
        let holding_center = lines
            .iter()
            .filter(|l| l.count_held_by(Marker::X) == 1)
            .count();

        // Center sits on row 1, column 1 and both diagonals.
        assert_eq!(holding_center, 4);
    }

    #[test]
    fn snapshot_is_independent_copy() {
        let mut board = Board::new();
        let snapshot = board.clone();
        board.place(0, 0, Marker::X).unwrap();

        assert_eq!(snapshot.cell_at(0, 0), Ok(CellState::Empty));
    }

    #[test]
    fn display_shows_ids_for_empty_cells() {
        let mut board = Board::new();
        board.place(0, 0, Marker::X).unwrap();
        board.place(2, 2, Marker::O).unwrap();

        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }
}
