//! The board: a fixed grid of cells addressable by coordinate or text.

use super::action::MoveError;
use super::address;
use super::config::{self, ConfigError};
use super::types::{Cell, Color, Coordinate, Piece};
use super::zones::ZoneLayout;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Orthogonal steps: east, west, north, south.
const STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A `width x height` grid of cells.
///
/// Every in-range coordinate maps to exactly one cell. Cells are stored in
/// row-major order starting from the bottom rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardData {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardData> for Board {
    type Error = ConfigError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        config::check_dimensions(data.width, data.height)?;
        if data.cells.len() != data.width * data.height {
            return Err(ConfigError::new(format!(
                "A {}x{} board needs {} cells, got {}",
                data.width,
                data.height,
                data.width * data.height,
                data.cells.len()
            )));
        }

        let board = Self {
            width: data.width,
            height: data.height,
            cells: data.cells,
        };
        for (index, cell) in board.cells.iter().enumerate() {
            let expected = Coordinate::new(index % board.width, index / board.width);
            if cell.coordinate() != expected || *cell.address() != address::format(expected) {
                return Err(ConfigError::new(format!(
                    "Cell {} is stored where {} belongs",
                    cell.address(),
                    expected
                )));
            }
        }
        Ok(board)
    }
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        config::check_dimensions(width, height)?;
        debug!(width, height, "Created board");
        Ok(Self::build(width, height))
    }

    fn build(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |column| Cell::new(Coordinate::new(column, row))))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.column < self.width && coordinate.row < self.height
    }

    fn index(&self, coordinate: Coordinate) -> Result<usize, MoveError> {
        if self.contains(coordinate) {
            Ok(coordinate.row * self.width + coordinate.column)
        } else {
            Err(MoveError::OutOfRange(coordinate))
        }
    }

    /// Gets the cell at a coordinate.
    pub fn cell_at(&self, coordinate: Coordinate) -> Result<&Cell, MoveError> {
        let index = self.index(coordinate)?;
        self.cells.get(index).ok_or(MoveError::OutOfRange(coordinate))
    }

    /// Gets the cell with a textual address such as `"B3"`.
    #[instrument(skip(self))]
    pub fn cell_at_address(&self, address: &str) -> Result<&Cell, MoveError> {
        let coordinate = address::parse(address, self.width, self.height)?;
        self.cell_at(coordinate)
    }

    /// Gets the occupant at a coordinate.
    pub fn occupant_at(&self, coordinate: Coordinate) -> Result<Option<Piece>, MoveError> {
        Ok(self.cell_at(coordinate)?.occupant())
    }

    /// Returns true if the coordinate is on the board and holds a piece.
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.cell_at(coordinate).is_ok_and(|cell| !cell.is_empty())
    }

    /// Returns the orthogonally adjacent cells that exist on the board.
    ///
    /// Corners yield 2, edges 3, interior cells 4.
    pub fn neighbors(&self, coordinate: Coordinate) -> Vec<&Cell> {
        STEPS
            .iter()
            .filter_map(|&(columns, rows)| coordinate.offset(columns, rows))
            .filter_map(|next| self.cell_at(next).ok())
            .collect()
    }

    /// Places a piece. Setup only; play relocates pieces instead.
    #[instrument(skip(self))]
    pub fn place_piece(&mut self, coordinate: Coordinate, color: Color) -> Result<(), MoveError> {
        let index = self.index(coordinate)?;
        self.cells[index].set_occupant(Some(Piece::new(color)));
        Ok(())
    }

    /// Removes every piece. Setup only.
    #[instrument(skip(self))]
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            cell.set_occupant(None);
        }
    }

    /// Clears the board and fills both start zones.
    #[instrument(skip(self, layout))]
    pub fn set_up(&mut self, layout: &ZoneLayout) {
        for cell in &mut self.cells {
            let owner = Color::iter().find(|&color| layout.start_of(color).contains(cell.coordinate()));
            cell.set_occupant(owner.map(Piece::new));
        }
        debug!(
            white = self.count_of(Color::White),
            black = self.count_of(Color::Black),
            "Placed starting pieces"
        );
    }

    /// Moves whatever stands on `from` to `to`.
    ///
    /// Callers validate first; this only guards the coordinates.
    pub(crate) fn relocate(&mut self, from: Coordinate, to: Coordinate) -> Result<(), MoveError> {
        let from_index = self.index(from)?;
        let to_index = self.index(to)?;
        let piece = self.cells[from_index].take_occupant();
        self.cells[to_index].set_occupant(piece);
        Ok(())
    }

    /// All coordinates currently holding a piece of `color`.
    pub fn pieces_of(&self, color: Color) -> BTreeSet<Coordinate> {
        self.cells
            .iter()
            .filter(|cell| cell.color() == Some(color))
            .map(|cell| cell.coordinate())
            .collect()
    }

    /// Number of pieces of `color` on the board.
    pub fn count_of(&self, color: Color) -> usize {
        self.cells.iter().filter(|cell| cell.color() == Some(color)).count()
    }

    /// All cells, bottom rank first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Ranks from the top of the board down, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width).rev()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::build(8, 8)
    }
}
