//! Piece conservation: moves relocate pieces, never create or destroy them.

use super::super::{Color, GameState};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: each colour owns exactly one zone's worth of pieces.
pub struct PieceConservationInvariant;

impl Invariant<GameState> for PieceConservationInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = state.layout().pieces_per_color();
        Color::iter().all(|color| state.board().count_of(color) == expected)
    }

    fn description() -> &'static str {
        "Each colour keeps exactly one zone's worth of pieces"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, GameConfig};

    #[test]
    fn test_fresh_game_holds() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        assert!(PieceConservationInvariant::holds(&state));
    }

    #[test]
    fn test_missing_piece_violates() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state.board_mut().clear_all();
        state.board_mut().place_piece(Coordinate::new(0, 0), Color::White).unwrap();
        assert!(!PieceConservationInvariant::holds(&state));
    }
}
