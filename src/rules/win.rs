//! Line ownership and win detection.

use crate::core::{Board, Line, Marker};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A completed line and the marker that completed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Win {
    pub winner: Marker,
    pub line: Line,
}

/// True iff all three cells of `line` hold `marker`.
pub fn is_won_by(line: &Line, marker: Marker) -> bool {
    line.count_held_by(marker) == 3
}

/// True iff exactly one cell of `line` is empty and the other two hold
/// `marker`.
///
/// A line with two empties is never a completion opportunity, and neither
/// is a line where the opponent holds a cell.
pub fn is_completion_opportunity(line: &Line, marker: Marker) -> bool {
    line.count_empty() == 1 && line.count_held_by(marker) == 2
}

/// Returns the first won line in board line order, if any.
///
/// No assumption is made about which marker can win; the first line held
/// entirely by either marker is reported.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<Win> {
    board.all_lines().into_iter().find_map(|line| {
        Marker::iter()
            .find(|marker| is_won_by(&line, *marker))
            .map(|winner| Win { winner, line })
    })
}

/// Returns the first line `marker` can complete with a single move.
#[instrument(skip(board))]
pub fn find_immediate_win_for(board: &Board, marker: Marker) -> Option<Line> {
    board
        .all_lines()
        .into_iter()
        .find(|line| is_completion_opportunity(line, marker))
}
