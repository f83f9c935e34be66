//! Autonomous move selection.
//!
//! Strategy: complete a line if one is a single move from done, otherwise
//! pick uniformly among the empty cells. Selection is synchronous; any
//! "thinking" delay belongs to whoever decides when to ask.

use crate::core::{Board, CellRef, Marker};
use crate::rules::find_immediate_win_for;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Computes moves on its own from the current board.
///
/// Holds no board state; only its RNG. Seeding with the same value
/// reproduces the same sequence of random fallbacks.
///
/// # Example
///
/// ```rust
/// use tictac::authority::AutonomousAuthority;
/// use tictac::core::{Board, Marker};
///
/// let mut board = Board::new();
/// board.place(0, 0, Marker::O).unwrap();
/// board.place(0, 1, Marker::O).unwrap();
///
/// let mut cpu = AutonomousAuthority::with_seed(7);
/// let cell = cpu.choose_move(&board, Marker::O).unwrap();
/// assert_eq!((cell.row(), cell.col()), (0, 2));
/// ```
#[derive(Clone, Debug)]
pub struct AutonomousAuthority {
    rng: ChaCha8Rng,
    seed: u64,
}

impl AutonomousAuthority {
    /// Create an authority with a deterministic RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an authority seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::with_seed(rand::random())
    }

    /// The seed this authority was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a cell for `own` to claim.
    ///
    /// Returns `None` only when the board is full.
    #[instrument(skip(self, board))]
    pub fn choose_move(&mut self, board: &Board, own: Marker) -> Option<CellRef> {
        if let Some(line) = find_immediate_win_for(board, own) {
            let cell = line.empty_cells().next();
            debug!(?cell, orientation = line.orientation().name(), "completing line");
            return cell;
        }

        let cell = board.empty_cells().choose(&mut self.rng).copied();
        debug!(?cell, "random placement");
        cell
    }
}

impl Default for AutonomousAuthority {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(x: &[usize], o: &[usize]) -> Board {
        let mut board = Board::new();
        for id in x {
            board.place_at(CellRef::from_id(*id).unwrap(), Marker::X).unwrap();
        }
        for id in o {
            board.place_at(CellRef::from_id(*id).unwrap(), Marker::O).unwrap();
        }
        board
    }

    #[test]
    fn completes_available_line() {
        let board = board_with(&[3, 5], &[1, 2]);
        let mut cpu = AutonomousAuthority::with_seed(1);

        // X can finish the anti-diagonal at 7.
        assert_eq!(cpu.choose_move(&board, Marker::X), CellRef::from_id(7).ok());
    }

    #[test]
    fn takes_first_opportunity_in_line_order() {
        // O can finish row 0 at 3 or column 0 at 7; row 0 comes first.
        let board = board_with(&[5, 9], &[1, 2, 4]);
        let mut cpu = AutonomousAuthority::with_seed(1);

        assert_eq!(cpu.choose_move(&board, Marker::O), CellRef::from_id(3).ok());
    }

    #[test]
    fn does_not_block_opponent() {
        // Only X has an opportunity; O falls back to random.
        let board = board_with(&[1, 2], &[5]);
        let mut cpu = AutonomousAuthority::with_seed(3);

        let cell = cpu.choose_move(&board, Marker::O).unwrap();
        assert!(board.cell(cell).is_empty());
    }

    #[test]
    fn random_fallback_picks_empty_cell() {
        let board = board_with(&[1, 9], &[5]);
        for seed in 0..20 {
            let mut cpu = AutonomousAuthority::with_seed(seed);
            let cell = cpu.choose_move(&board, Marker::O).unwrap();
            assert!(board.cell(cell).is_empty());
        }
    }

    #[test]
    fn same_seed_same_choice() {
        let board = Board::new();
        let mut a = AutonomousAuthority::with_seed(42);
        let mut b = AutonomousAuthority::with_seed(42);

        assert_eq!(a.choose_move(&board, Marker::X), b.choose_move(&board, Marker::X));
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn full_board_has_no_move() {
        let board = board_with(&[1, 3, 6, 7, 8], &[2, 4, 5, 9]);
        let mut cpu = AutonomousAuthority::with_seed(0);

        assert_eq!(cpu.choose_move(&board, Marker::X), None);
    }
}
