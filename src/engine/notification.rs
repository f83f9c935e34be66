//! The closed set of notifications the engine publishes.
//!
//! Payloads carry raw structured data only: markers, coordinates, counts
//! and board snapshots. Formatting them for display is the consumer's job.

use crate::core::{Board, BoardError, CellRef, Line, Marker, MoveInput};
use serde::Serialize;
use uuid::Uuid;

/// A move was rejected; nothing changed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InvalidMove {
    /// Player whose move was rejected
    pub player: Marker,
    /// What was attempted, as supplied
    pub input: MoveInput,
    pub reason: BoardError,
}

/// A move was submitted after the game ended; nothing changed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameInactive {
    /// What was attempted, if the caller supplied a cell
    pub input: Option<MoveInput>,
}

/// A move was applied.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MoveMade {
    pub player: Marker,
    pub cell: CellRef,
    /// Board after the move
    pub board: Board,
}

/// The game continues with `next_player` to move.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TurnChanged {
    pub next_player: Marker,
}

/// The last move completed a line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameWon {
    pub game_id: Uuid,
    pub winner: Marker,
    /// Total moves in the game
    pub moves: usize,
    pub board: Board,
    pub line: Line,
}

/// The board filled without a completed line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameTied {
    pub game_id: Uuid,
    pub moves: usize,
    pub board: Board,
}

/// A fresh game started.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameReset {
    pub game_id: Uuid,
    pub first_player: Marker,
}

/// Every notification the engine can raise.
///
/// Consumers should match with a wildcard arm: more kinds may be added.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum Notification {
    InvalidMove(InvalidMove),
    GameInactive(GameInactive),
    MoveMade(MoveMade),
    TurnChanged(TurnChanged),
    GameWon(GameWon),
    GameTied(GameTied),
    GameReset(GameReset),
}

impl Notification {
    /// Name of the notification kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidMove(_) => "invalidMove",
            Self::GameInactive(_) => "gameInactive",
            Self::MoveMade(_) => "moveMade",
            Self::TurnChanged(_) => "turnChanged",
            Self::GameWon(_) => "gameWon",
            Self::GameTied(_) => "gameTied",
            Self::GameReset(_) => "gameReset",
        }
    }

    /// True for the notifications that end a game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameWon(_) | Self::GameTied(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_kind_tag() {
        let notification = Notification::TurnChanged(TurnChanged {
            next_player: Marker::O,
        });

        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["kind"], "turnChanged");
        assert_eq!(json["payload"]["next_player"], "O");
    }

    #[test]
    fn name_matches_serialized_kind() {
        let notification = Notification::GameInactive(GameInactive {
            input: Some(MoveInput::Id(3)),
        });
        let json = serde_json::to_value(&notification).unwrap();

        assert_eq!(json["kind"], notification.name());
        assert!(!notification.is_terminal());
    }
}
