//! Win sequencing for corners.
//!
//! The colour that moves first has a tempo advantage, so when it completes
//! its target zone the game is not over yet: the other colour gets exactly
//! one more turn. Filling its own target on that turn makes a dead heat;
//! anything else hands the win to the closer. The second colour, finishing
//! first, wins at once.

use super::super::{Board, Color, ZoneLayout};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Win evaluator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinState {
    /// Nobody has completed a zone.
    InProgress,
    /// The first colour completed its zone; the other colour has one turn.
    PendingConfirmation {
        /// Colour that completed first.
        closer: Color,
    },
    /// Decided.
    Finished {
        /// Winning colour.
        winner: Color,
    },
    /// Both colours completed within the same confirmation window.
    DeadHeat,
}

impl WinState {
    /// Returns true for `Finished` and `DeadHeat`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WinState::Finished { .. } | WinState::DeadHeat)
    }
}

/// Decides game status after every applied move.
///
/// Read-only with respect to the board, stateful across one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinEvaluator {
    layout: ZoneLayout,
    first: Color,
    state: WinState,
}

impl WinEvaluator {
    /// Creates an evaluator for a game in which `first` moves first.
    pub fn new(layout: ZoneLayout, first: Color) -> Self {
        Self {
            layout,
            first,
            state: WinState::InProgress,
        }
    }

    /// Forgets everything from the previous game.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first: Color) {
        self.first = first;
        self.state = WinState::InProgress;
    }

    /// Current state.
    pub fn state(&self) -> WinState {
        self.state
    }

    /// Colour that moved first this game.
    pub fn first(&self) -> Color {
        self.first
    }

    /// Returns true if `color` holds every cell of its target zone.
    pub fn has_completed(&self, board: &Board, color: Color) -> bool {
        self.layout.target_of(color).is_filled_by(board, color)
    }

    /// Reclassifies the game after `mover` has moved.
    ///
    /// Once terminal, the state never changes.
    #[instrument(skip(self, board), fields(state = ?self.state))]
    pub fn evaluate(&mut self, board: &Board, mover: Color) -> WinState {
        if self.state.is_terminal() {
            return self.state;
        }

        let completed = self.has_completed(board, mover);
        let next = if mover == self.first {
            match self.state {
                WinState::InProgress if completed => WinState::PendingConfirmation { closer: mover },
                state => state,
            }
        } else {
            match self.state {
                WinState::PendingConfirmation { .. } if completed => WinState::DeadHeat,
                WinState::PendingConfirmation { closer } => WinState::Finished { winner: closer },
                _ if completed => WinState::Finished { winner: mover },
                state => state,
            }
        };

        if next != self.state {
            info!(?mover, from = ?self.state, to = ?next, "Win state changed");
        }
        self.state = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Zone};

    fn layout() -> ZoneLayout {
        ZoneLayout::from_config(&GameConfig::default())
    }

    fn fill(board: &mut Board, zone: &Zone, color: Color) {
        for coordinate in zone.iter() {
            board.place_piece(coordinate, color).unwrap();
        }
    }

    #[test]
    fn test_no_completion_stays_in_progress() {
        let mut evaluator = WinEvaluator::new(layout(), Color::White);
        let board = Board::default();
        assert_eq!(evaluator.evaluate(&board, Color::White), WinState::InProgress);
        assert_eq!(evaluator.evaluate(&board, Color::Black), WinState::InProgress);
    }

    #[test]
    fn test_first_color_completion_is_pending() {
        let layout = layout();
        let mut board = Board::default();
        fill(&mut board, layout.target_of(Color::White), Color::White);

        let mut evaluator = WinEvaluator::new(layout, Color::White);
        assert_eq!(
            evaluator.evaluate(&board, Color::White),
            WinState::PendingConfirmation {
                closer: Color::White
            }
        );
    }

    #[test]
    fn test_second_color_failing_confirms_closer() {
        let layout = layout();
        let mut board = Board::default();
        fill(&mut board, layout.target_of(Color::White), Color::White);

        let mut evaluator = WinEvaluator::new(layout, Color::White);
        evaluator.evaluate(&board, Color::White);
        assert_eq!(
            evaluator.evaluate(&board, Color::Black),
            WinState::Finished {
                winner: Color::White
            }
        );
    }

    #[test]
    fn test_second_color_matching_is_dead_heat() {
        let layout = layout();
        let mut board = Board::default();
        fill(&mut board, layout.target_of(Color::White), Color::White);

        let mut evaluator = WinEvaluator::new(layout.clone(), Color::White);
        evaluator.evaluate(&board, Color::White);

        fill(&mut board, layout.target_of(Color::Black), Color::Black);
        assert_eq!(evaluator.evaluate(&board, Color::Black), WinState::DeadHeat);
    }

    #[test]
    fn test_second_color_finishing_first_wins_outright() {
        let layout = layout();
        let mut board = Board::default();
        fill(&mut board, layout.target_of(Color::Black), Color::Black);

        let mut evaluator = WinEvaluator::new(layout, Color::White);
        assert_eq!(
            evaluator.evaluate(&board, Color::Black),
            WinState::Finished {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn test_first_binding_follows_who_moved_first() {
        let layout = layout();
        let mut board = Board::default();
        fill(&mut board, layout.target_of(Color::Black), Color::Black);

        // Black moved first this game, so Black completing is only pending.
        let mut evaluator = WinEvaluator::new(layout, Color::Black);
        assert_eq!(
            evaluator.evaluate(&board, Color::Black),
            WinState::PendingConfirmation {
                closer: Color::Black
            }
        );
    }

    #[test]
    fn test_terminal_state_is_sticky_until_reset() {
        let layout = layout();
        let mut board = Board::default();
        fill(&mut board, layout.target_of(Color::Black), Color::Black);

        let mut evaluator = WinEvaluator::new(layout, Color::White);
        evaluator.evaluate(&board, Color::Black);
        board.clear_all();
        assert!(evaluator.evaluate(&board, Color::White).is_terminal());

        evaluator.reset(Color::White);
        assert_eq!(evaluator.state(), WinState::InProgress);
    }

    #[test]
    fn test_partial_zone_is_not_completion() {
        let layout = layout();
        let mut board = Board::default();
        let target = layout.target_of(Color::White).clone();
        for coordinate in target.iter().skip(1) {
            board.place_piece(coordinate, Color::White).unwrap();
        }
        // The missing cell held by the opponent does not count.
        if let Some(first) = target.iter().next() {
            board.place_piece(first, Color::Black).unwrap();
        }

        let evaluator = WinEvaluator::new(layout, Color::White);
        assert!(!evaluator.has_completed(&board, Color::White));
    }
}
