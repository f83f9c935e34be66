//! Board addressing and placement errors.

use super::cell::Marker;
use serde::Serialize;
use thiserror::Error;

/// Errors raised when addressing or mutating the board.
///
/// All of these are recoverable: the board is never modified when one
/// is returned.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize)]
pub enum BoardError {
    #[error("Cell ({row}, {col}) is outside the 3x3 board")]
    OutOfRange { row: usize, col: usize },

    #[error("Cell id {0} is outside 1..=9")]
    InvalidId(usize),

    #[error("Cell ({row}, {col}) is already occupied by {occupant}")]
    CellOccupied {
        row: usize,
        col: usize,
        occupant: Marker,
    },
}
