//! Alternating turn invariant: colours alternate, first colour opens.

use super::super::GameState;
use super::Invariant;

/// Invariant: the history alternates colours starting with the colour that
/// moved first, and the side to move follows from the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.first().is_some_and(|opening| opening.color != state.first()) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].color == pair[1].color) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            state.first()
        } else {
            state.first().opponent()
        };
        state.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Colours alternate turns, beginning with the first colour"
    }
}
