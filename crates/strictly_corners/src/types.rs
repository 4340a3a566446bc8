//! Core domain types for corners.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Piece colour. Each player is dealt one colour per game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Color {
    /// White (moves first by default).
    White,
    /// Black.
    Black,
}

impl Color {
    /// Returns the opposing colour.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// A piece on the board.
///
/// Pieces have no identity of their own: a piece is whatever currently
/// occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
}

impl Piece {
    /// Creates a piece of the given colour.
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Returns the piece colour.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// A board coordinate, 0-indexed. Row 0 is the bottom rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinate {
    /// Column (file), 0 is `A`.
    pub column: usize,
    /// Row (rank), 0 is rank `1`.
    pub row: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Shifts the coordinate by a signed offset.
    ///
    /// Returns `None` if either component would become negative. Upper
    /// bounds are the board's concern.
    pub fn offset(self, columns: isize, rows: isize) -> Option<Self> {
        Some(Self {
            column: self.column.checked_add_signed(columns)?,
            row: self.row.checked_add_signed(rows)?,
        })
    }

    /// Reflects `self` through `pivot`: the cell two steps away along the
    /// line from `self` to `pivot`.
    pub fn reflect_through(self, pivot: Coordinate) -> Option<Self> {
        let columns = pivot.column as isize - self.column as isize;
        let rows = pivot.row as isize - self.row as isize;
        pivot.offset(columns, rows)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::address::format(*self))
    }
}

/// A single board cell. Identity is fixed; occupancy changes.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Cell {
    /// Position on the board.
    #[getter(copy)]
    coordinate: Coordinate,
    /// Textual address, e.g. `"A1"`.
    address: String,
    /// Current occupant, if any.
    #[getter(copy)]
    occupant: Option<Piece>,
}

impl Cell {
    /// Creates an empty cell.
    pub(crate) fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            address: crate::address::format(coordinate),
            occupant: None,
        }
    }

    /// Returns true if no piece stands here.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Returns the occupant's colour, if any.
    pub fn color(&self) -> Option<Color> {
        self.occupant.map(|piece| piece.color())
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<Piece>) {
        self.occupant = occupant;
    }

    pub(crate) fn take_occupant(&mut self) -> Option<Piece> {
        self.occupant.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn test_offset_rejects_negative() {
        assert_eq!(Coordinate::new(0, 3).offset(-1, 0), None);
        assert_eq!(Coordinate::new(2, 3).offset(-1, 1), Some(Coordinate::new(1, 4)));
    }

    #[test]
    fn test_reflect_through_neighbor() {
        let from = Coordinate::new(0, 5);
        assert_eq!(from.reflect_through(Coordinate::new(0, 6)), Some(Coordinate::new(0, 7)));
        assert_eq!(from.reflect_through(Coordinate::new(1, 5)), Some(Coordinate::new(2, 5)));
        assert_eq!(Coordinate::new(1, 0).reflect_through(Coordinate::new(0, 0)), None);
    }

    #[test]
    fn test_new_cell_is_empty_and_addressed() {
        let cell = Cell::new(Coordinate::new(7, 7));
        assert!(cell.is_empty());
        assert_eq!(cell.address(), "H8");
    }
}
