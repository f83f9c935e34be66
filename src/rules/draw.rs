//! Tie detection.

use super::win::find_winner;
use crate::core::Board;
use tracing::instrument;

/// A full board with no completed line.
///
/// `find_winner` is authoritative: a board whose last move completed a line
/// is a win, never a tie.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && find_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellRef, Marker};

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
    fn empty_board_is_not_a_tie() {
        assert!(!is_tie(&Board::new()));
    }

    #[test]
    fn full_board_without_line_is_a_tie() {
        // X O X / O O X / X X O
        let board = board_with(&[1, 3, 6, 7, 8], &[2, 4, 5, 9]);
        assert!(is_tie(&board));
    }

    #[test]
    fn full_board_with_line_is_not_a_tie() {
        // X X X / O O X / X O O
        let board = board_with(&[1, 2, 3, 6, 7], &[4, 5, 8, 9]);
        assert!(board.is_full());
        assert!(!is_tie(&board));
    }
}
