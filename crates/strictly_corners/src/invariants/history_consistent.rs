//! History consistency: replaying the moves reproduces the board.

use super::super::GameState;
use super::Invariant;

/// Invariant: the board equals the starting position with the history
/// replayed on top.
///
/// Each replayed move must find a piece of its colour on the source and an
/// empty destination.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut replay = state.starting_board();

        for mov in state.history() {
            let source_ok = matches!(replay.occupant_at(mov.from), Ok(Some(piece)) if piece.color() == mov.color);
            let target_ok = matches!(replay.occupant_at(mov.to), Ok(None));
            if !source_ok || !target_ok || replay.relocate(mov.from, mov.to).is_err() {
                return false;
            }
        }

        replay == *state.board()
    }

    fn description() -> &'static str {
        "Board matches the starting position with history replayed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Coordinate, GameConfig, Move};

    #[test]
    fn test_empty_game_holds() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_applied_moves_hold() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state
            .apply(Move::new(Color::White, Coordinate::new(4, 2), Coordinate::new(4, 3)))
            .unwrap();
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_tampered_board_violates() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state
            .apply(Move::new(Color::White, Coordinate::new(4, 2), Coordinate::new(4, 3)))
            .unwrap();
        state
            .board_mut()
            .relocate(Coordinate::new(4, 3), Coordinate::new(4, 4))
            .unwrap();
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
