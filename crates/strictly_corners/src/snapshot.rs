//! Serializable picture of a session for shells and tests.

use super::action::Move;
use super::board::Board;
use super::session::{GameStatus, Player};
use super::types::Color;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Occupancy by row, top rank first.
    pub rows: Vec<Vec<Option<Color>>>,
    /// Both players, player one first.
    pub players: [Player; 2],
    /// Player whose move it is.
    pub active: Player,
    /// Game status.
    pub status: GameStatus,
    /// Moves so far, oldest first.
    pub history: Vec<Move>,
}

impl Snapshot {
    pub(crate) fn capture(
        board: &Board,
        players: &[Player; 2],
        active: &Player,
        status: &GameStatus,
        history: &[Move],
    ) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            rows: board
                .rows()
                .map(|row| row.iter().map(|cell| cell.color()).collect())
                .collect(),
            players: players.clone(),
            active: active.clone(),
            status: status.clone(),
            history: history.to_vec(),
        }
    }

    /// Colour on a cell, row 0 being the bottom rank.
    pub fn color_at(&self, column: usize, row: usize) -> Option<Color> {
        let from_top = self.height.checked_sub(row.checked_add(1)?)?;
        self.rows.get(from_top)?.get(column).copied().flatten()
    }
}
