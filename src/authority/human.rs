//! Validation of externally supplied moves.

use crate::core::{Board, BoardError, CellRef, MoveInput};

/// Validates moves chosen by a person at some input device.
///
/// Stateless: it only checks a proposed input against the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HumanAuthority;

impl HumanAuthority {
    /// Resolve `input` to a cell and check that the cell is free.
    ///
    /// ```rust
    /// use tictac::authority::HumanAuthority;
    /// use tictac::core::{Board, BoardError, Marker, MoveInput};
    ///
    /// let mut board = Board::new();
    /// board.place(0, 0, Marker::X).unwrap();
    ///
    /// let human = HumanAuthority;
    /// assert!(human.validate(&board, MoveInput::Id(2)).is_ok());
    /// assert!(matches!(
    ///     human.validate(&board, MoveInput::Id(1)),
    ///     Err(BoardError::CellOccupied { .. })
    /// ));
    /// assert_eq!(
    ///     human.validate(&board, MoveInput::Id(10)),
    ///     Err(BoardError::InvalidId(10))
    /// );
    /// ```
    pub fn validate(&self, board: &Board, input: MoveInput) -> Result<CellRef, BoardError> {
        let cell = input.resolve()?;
        match board.cell(cell).marker() {
            Some(occupant) => Err(BoardError::CellOccupied {
                row: cell.row(),
                col: cell.col(),
                occupant,
            }),
            None => Ok(cell),
        }
    }
}
