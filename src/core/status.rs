//! Game status: the states of the game-state machine.
//!
//! `AwaitingMove` is the only initial state. `Won` and `Tied` are final:
//! once reached, the only way forward is a reset.

use super::cell::Marker;
use super::line::Line;
use serde::Serialize;

/// Current position of the game-state machine.
///
/// All methods are pure.
///
/// # Example
///
/// ```rust
/// use tictac::core::{GameStatus, Marker};
///
/// let status = GameStatus::AwaitingMove(Marker::X);
/// assert_eq!(status.name(), "AwaitingMove");
/// assert!(!status.is_final());
/// assert_eq!(status.active_player(), Some(Marker::X));
///
/// assert!(GameStatus::Tied.is_final());
/// assert_eq!(GameStatus::Tied.active_player(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// The given player is to move.
    AwaitingMove(Marker),
    /// `winner` completed `line`.
    Won { winner: Marker, line: Line },
    /// The board filled with no completed line.
    Tied,
}

impl GameStatus {
    /// Name of the state for logging.
    pub fn name(&self) -> &str {
        match self {
            Self::AwaitingMove(_) => "AwaitingMove",
            Self::Won { .. } => "Won",
            Self::Tied => "Tied",
        }
    }

    /// Check if this is a terminal state.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Tied)
    }

    /// The player to move, if the game is still going.
    pub fn active_player(&self) -> Option<Marker> {
        match self {
            Self::AwaitingMove(player) => Some(*player),
            _ => None,
        }
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Self::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn won() -> GameStatus {
        GameStatus::Won {
            winner: Marker::O,
            line: Board::new().all_lines()[0].clone(),
        }
    }

    #[test]
    fn name_returns_correct_value() {
        assert_eq!(GameStatus::AwaitingMove(Marker::O).name(), "AwaitingMove");
        assert_eq!(won().name(), "Won");
        assert_eq!(GameStatus::Tied.name(), "Tied");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!GameStatus::AwaitingMove(Marker::X).is_final());
        assert!(won().is_final());
        assert!(GameStatus::Tied.is_final());
    }

    #[test]
    fn winner_only_reported_for_won() {
        assert_eq!(won().winner(), Some(Marker::O));
        assert_eq!(GameStatus::Tied.winner(), None);
        assert_eq!(GameStatus::AwaitingMove(Marker::X).winner(), None);
    }

    #[test]
    fn status_serializes_correctly() {
        let json = serde_json::to_value(GameStatus::AwaitingMove(Marker::X)).unwrap();
        assert_eq!(json, serde_json::json!({ "AwaitingMove": "X" }));
    }
}
