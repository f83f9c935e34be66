//! Move history tracking.
//!
//! History is append-only: `record` returns a new history with the move
//! added and leaves the original untouched.

use super::cell::{CellRef, Marker};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Record of a single applied move.
///
/// # Example
///
/// ```rust
/// use tictac::core::{CellRef, Marker, MoveRecord};
///
/// let record = MoveRecord::new(Marker::X, CellRef::from_id(5).unwrap());
/// assert_eq!(record.cell.row(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MoveRecord {
    /// The player who moved
    pub player: Marker,
    /// The cell that was claimed
    pub cell: CellRef,
    /// When the move was applied
    pub timestamp: DateTime<Utc>,
}

impl MoveRecord {
    /// Create a record stamped with the current time.
    pub fn new(player: Marker, cell: CellRef) -> Self {
        Self {
            player,
            cell,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of applied moves.
///
/// # Example
///
/// ```rust
/// use tictac::core::{CellRef, Marker, MoveHistory, MoveRecord};
///
/// let history = MoveHistory::new();
/// let history = history.record(MoveRecord::new(Marker::X, CellRef::from_id(1).unwrap()));
/// let history = history.record(MoveRecord::new(Marker::O, CellRef::from_id(5).unwrap()));
///
/// let ids: Vec<usize> = history.get_path().iter().map(|c| c.id()).collect();
/// assert_eq!(ids, vec![1, 5]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Copy of this history with `record` appended.
    pub fn record(&self, record: MoveRecord) -> Self {
        let mut moves = self.moves.clone();
        moves.push(record);
        Self { moves }
    }

    /// The cells claimed, in play order.
    pub fn get_path(&self) -> Vec<CellRef> {
        self.moves.iter().map(|m| m.cell).collect()
    }

    /// Moves made by `player`, in play order.
    pub fn moves_by(&self, player: Marker) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |m| m.player == player)
    }

    /// Time between the first and last move.
    ///
    /// Returns `None` if no move has been made. A wall clock that stepped
    /// backwards between moves yields zero.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.moves.first()?, self.moves.last()?);
        let elapsed = last.timestamp.signed_duration_since(first.timestamp);
        Some(elapsed.to_std().unwrap_or(Duration::ZERO))
    }

    /// All recorded moves in order.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(id: usize) -> CellRef {
        CellRef::from_id(id).unwrap()
    }

    #[test]
    fn new_history_is_empty() {
        let history = MoveHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = MoveHistory::new();
        let new_history = history.record(MoveRecord::new(Marker::X, cell(1)));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn moves_by_filters_player() {
        let history = MoveHistory::new()
            .record(MoveRecord::new(Marker::X, cell(1)))
            .record(MoveRecord::new(Marker::O, cell(5)))
            .record(MoveRecord::new(Marker::X, cell(9)));

        let x_cells: Vec<usize> = history.moves_by(Marker::X).map(|m| m.cell.id()).collect();
        assert_eq!(x_cells, vec![1, 9]);
        assert_eq!(history.last().map(|m| m.player), Some(Marker::X));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = MoveHistory::new().record(MoveRecord::new(Marker::X, cell(1)));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(MoveRecord::new(Marker::O, cell(2)));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_move_has_duration_zero() {
        let history = MoveHistory::new().record(MoveRecord::new(Marker::X, cell(3)));
        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn clock_stepping_back_clamps_duration_to_zero() {
        let first = MoveRecord::new(Marker::X, cell(1));
        let mut second = MoveRecord::new(Marker::O, cell(2));
        second.timestamp = first.timestamp - chrono::Duration::seconds(5);

        let history = MoveHistory::new().record(first).record(second);

        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = MoveHistory::new().record(MoveRecord::new(Marker::O, cell(4)));

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json["moves"][0]["player"], "O");
        assert_eq!(json["moves"][0]["cell"]["row"], 1);
        assert_eq!(json["moves"][0]["cell"]["col"], 0);
    }
}
