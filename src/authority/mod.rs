//! Move authorities: who decides or validates each placement.
//!
//! The engine is parameterized per player by an [`Authority`]. Both
//! variants validate placements the same way; only the autonomous variant
//! can propose a move on its own. Authorities read the board and return
//! coordinates. They never mutate it.

mod autonomous;
mod human;

pub use autonomous::AutonomousAuthority;
pub use human::HumanAuthority;

use crate::core::{Board, BoardError, CellRef, Marker, MoveInput};
use serde::{Deserialize, Serialize};

/// Configuration tag for a player's authority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    #[default]
    Human,
    Autonomous,
}

/// Decision-making unit for one player.
#[derive(Clone, Debug)]
pub enum Authority {
    Human(HumanAuthority),
    Autonomous(AutonomousAuthority),
}

impl Authority {
    /// Build an authority for `kind`. `seed` only matters for autonomous
    /// players; without one the RNG is seeded from entropy.
    pub fn from_kind(kind: PlayerKind, seed: Option<u64>) -> Self {
        match kind {
            PlayerKind::Human => Authority::Human(HumanAuthority),
            PlayerKind::Autonomous => Authority::Autonomous(
                seed.map(AutonomousAuthority::with_seed)
                    .unwrap_or_else(AutonomousAuthority::from_entropy),
            ),
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            Authority::Human(_) => PlayerKind::Human,
            Authority::Autonomous(_) => PlayerKind::Autonomous,
        }
    }

    /// Check a proposed placement against the board.
    pub fn validate(&self, board: &Board, input: MoveInput) -> Result<CellRef, BoardError> {
        HumanAuthority.validate(board, input)
    }

    /// Propose a move, if this authority decides on its own.
    pub fn propose(&mut self, board: &Board, own: Marker) -> Option<CellRef> {
        match self {
            Authority::Human(_) => None,
            Authority::Autonomous(cpu) => cpu.choose_move(board, own),
        }
    }
}

impl Default for Authority {
    fn default() -> Self {
        Authority::Human(HumanAuthority)
    }
}

/// One authority per marker.
#[derive(Clone, Debug, Default)]
pub struct Authorities {
    x: Authority,
    o: Authority,
}

impl Authorities {
    pub fn new(x: Authority, o: Authority) -> Self {
        Self { x, o }
    }

    pub fn get(&self, marker: Marker) -> &Authority {
        match marker {
            Marker::X => &self.x,
            Marker::O => &self.o,
        }
    }

    pub fn get_mut(&mut self, marker: Marker) -> &mut Authority {
        match marker {
            Marker::X => &mut self.x,
            Marker::O => &mut self.o,
        }
    }

    pub fn set(&mut self, marker: Marker, authority: Authority) {
        *self.get_mut(marker) = authority;
    }

    /// Exchange the authorities of the two markers.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.x, &mut self.o);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_kind_builds_matching_variant() {
        assert_eq!(Authority::from_kind(PlayerKind::Human, None).kind(), PlayerKind::Human);
        assert_eq!(
            Authority::from_kind(PlayerKind::Autonomous, Some(9)).kind(),
            PlayerKind::Autonomous
        );
    }

    #[test]
    fn human_never_proposes() {
        let mut human = Authority::default();
        assert_eq!(human.propose(&Board::new(), Marker::X), None);
    }

    #[test]
    fn autonomous_proposes_empty_cell() {
        let mut cpu = Authority::from_kind(PlayerKind::Autonomous, Some(5));
        let cell = cpu.propose(&Board::new(), Marker::O).unwrap();
        assert!(Board::new().cell(cell).is_empty());
    }

    #[test]
    fn swap_exchanges_kinds() {
        let mut authorities = Authorities::new(
            Authority::from_kind(PlayerKind::Human, None),
            Authority::from_kind(PlayerKind::Autonomous, Some(1)),
        );
        authorities.swap();

        assert_eq!(authorities.get(Marker::X).kind(), PlayerKind::Autonomous);
        assert_eq!(authorities.get(Marker::O).kind(), PlayerKind::Human);
    }

    #[test]
    fn player_kind_deserializes_snake_case() {
        let kind: PlayerKind = serde_json::from_str("\"autonomous\"").unwrap();
        assert_eq!(kind, PlayerKind::Autonomous);
    }
}
