//! Markers, cell states and cell addressing.
//!
//! A cell can be addressed two ways: by `(row, col)` in `0..3 x 0..3`, or by
//! a 1-based linear id in `1..=9` (row-major, `id = 3 * row + col + 1`).
//! Both resolve to the same [`CellRef`].

use super::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// Token identifying which player occupies a cell.
///
/// Markers are opaque: two markers are equal iff they identify the same
/// player. How a marker is drawn is a presentation concern.
///
/// Iteration order (`Marker::iter()`) is the conventional turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// Returns the other player's marker.
    ///
    /// ```rust
    /// use tictac::core::Marker;
    ///
    /// assert_eq!(Marker::X.opponent(), Marker::O);
    /// assert_eq!(Marker::O.opponent(), Marker::X);
    /// ```
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Marker::X => "X",
            Marker::O => "O",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Occupied(Marker),
}

impl CellState {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// The occupying marker, if any.
    pub fn marker(&self) -> Option<Marker> {
        match self {
            CellState::Empty => None,
            CellState::Occupied(marker) => Some(*marker),
        }
    }

    pub fn is_held_by(&self, marker: Marker) -> bool {
        *self == CellState::Occupied(marker)
    }
}

/// A validated reference to one cell of the board.
///
/// A `CellRef` can only be built from in-range coordinates or ids, so
/// holding one means the address is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CellRef {
    row: usize,
    col: usize,
}

impl CellRef {
    /// Build a reference from zero-based coordinates.
    ///
    /// ```rust
    /// use tictac::core::CellRef;
    ///
    /// let cell = CellRef::new(1, 2).unwrap();
    /// assert_eq!(cell.id(), 6);
    /// assert!(CellRef::new(3, 0).is_err());
    /// ```
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// Build a reference from a 1-based linear id (`1..=9`).
    ///
    /// ```rust
    /// use tictac::core::CellRef;
    ///
    /// let cell = CellRef::from_id(5).unwrap();
    /// assert_eq!((cell.row(), cell.col()), (1, 1));
    /// assert!(CellRef::from_id(0).is_err());
    /// assert!(CellRef::from_id(10).is_err());
    /// ```
    pub fn from_id(id: usize) -> Result<Self, BoardError> {
        if !(1..=SIZE * SIZE).contains(&id) {
            return Err(BoardError::InvalidId(id));
        }
        let index = id - 1;
        Ok(Self {
            row: index / SIZE,
            col: index % SIZE,
        })
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// The 1-based linear id of this cell.
    pub fn id(&self) -> usize {
        SIZE * self.row + self.col + 1
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = CellRef> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| CellRef::at(row, col)))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

/// A cell selection as supplied by an input collaborator.
///
/// The engine translates ids to coordinates and rejects out-of-range
/// values; this type preserves exactly what was attempted so it can be
/// reported back in an `invalidMove` notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveInput {
    At { row: usize, col: usize },
    Id(usize),
}

impl MoveInput {
    /// Resolve the input to a cell reference without looking at occupancy.
    pub fn resolve(self) -> Result<CellRef, BoardError> {
        match self {
            MoveInput::At { row, col } => CellRef::new(row, col),
            MoveInput::Id(id) => CellRef::from_id(id),
        }
    }
}

impl From<CellRef> for MoveInput {
    fn from(cell: CellRef) -> Self {
        MoveInput::At {
            row: cell.row,
            col: cell.col,
        }
    }
}

impl fmt::Display for MoveInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveInput::At { row, col } => write!(f, "[{row},{col}]"),
            MoveInput::Id(id) => write!(f, "#{id}"),
        }
    }
}
