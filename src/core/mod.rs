//! Core game types and logic.
//!
//! This module contains the pure core of the game:
//! - Markers, cell states and addressing
//! - The board and its derived lines
//! - Game status and append-only move history
//!
//! Nothing in this module performs I/O or knows about observers.

mod board;
mod cell;
mod error;
mod history;
mod line;
mod status;

pub use board::Board;
pub use cell::{CellRef, CellState, Marker, MoveInput, SIZE};
pub use error::BoardError;
pub use history::{MoveHistory, MoveRecord};
pub use line::{Line, Orientation, LINE_COUNT};
pub use status::GameStatus;
