//! Board plus turn order: the part of a game the invariants reason about.

use super::action::{Move, MoveError};
use super::board::Board;
use super::config::{ConfigError, GameConfig};
use super::types::Color;
use super::zones::ZoneLayout;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete positional state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Start and target zones.
    layout: ZoneLayout,
    /// Colour that moved first this game.
    first: Color,
    /// Colour whose turn it is in strict alternation.
    to_move: Color,
    /// Applied moves, oldest first.
    history: Vec<Move>,
}

impl GameState {
    /// Creates the starting position for a configuration.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut board = Board::new(config.width(), config.height())?;
        let layout = ZoneLayout::from_config(config);
        board.set_up(&layout);
        Ok(Self {
            board,
            layout,
            first: config.first_color(),
            to_move: config.first_color(),
            history: Vec::new(),
        })
    }

    /// Returns to the starting position.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first: Color) {
        self.board.set_up(&self.layout);
        self.first = first;
        self.to_move = first;
        self.history.clear();
    }

    /// The position the history replays from.
    pub fn starting_board(&self) -> Board {
        let mut board = self.board.clone();
        board.set_up(&self.layout);
        board
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the zone layout.
    pub fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    /// Colour that moved first.
    pub fn first(&self) -> Color {
        self.first
    }

    /// Colour due to move next in strict alternation.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies a move (unchecked - validate with `MoveValidator` first).
    pub(crate) fn apply(&mut self, mov: Move) -> Result<(), MoveError> {
        self.board.relocate(mov.from, mov.to)?;
        self.history.push(mov);
        self.to_move = mov.color.opponent();
        debug!(%mov, ply = self.history.len(), "Applied move");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;

    #[test]
    fn test_starting_position() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        assert_eq!(state.board().count_of(Color::White), 12);
        assert_eq!(state.board().count_of(Color::Black), 12);
        assert_eq!(state.to_move(), Color::White);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_apply_then_reset() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        let mov = Move::new(Color::White, Coordinate::new(4, 2), Coordinate::new(4, 3));
        state.apply(mov).unwrap();
        assert_eq!(state.to_move(), Color::Black);
        assert_eq!(state.history(), &[mov]);
        assert_ne!(state.board(), &state.starting_board());

        state.reset(Color::Black);
        assert_eq!(state.to_move(), Color::Black);
        assert_eq!(state.board(), &state.starting_board());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_dimensions(4, 4, 3, 3);
        assert!(GameState::new(&config).is_err());
    }

    #[test]
    fn test_deserialize_rejects_broken_board() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        let mut value = serde_json::to_value(&state).unwrap();
        value["board"]["cells"] = serde_json::json!([]);
        assert!(serde_json::from_value::<GameState>(value).is_err());
    }
}
