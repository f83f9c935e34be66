//! Engine, registry and observer errors.

use crate::core::{BoardError, Marker};
use thiserror::Error;

/// Reasons a move was not applied.
///
/// Every variant is recoverable and leaves the engine state intact.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid move: {0}")]
    Invalid(#[from] BoardError),

    #[error("Game is over; reset to play again")]
    Inactive,

    #[error("{0} is a human player and must supply a move")]
    HumanTurn(Marker),

    #[error("No empty cell is left to play")]
    NoMoveAvailable,
}

/// Errors from observer subscription.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("An observer named '{0}' is already subscribed")]
    DuplicateObserverName(String),
}

/// Failure reported by, or caught around, a single observer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ObserverError {
    #[error("Observer failed: {0}")]
    Failed(String),

    #[error("Observer panicked: {0}")]
    Panicked(String),
}
