//! Contract-based move validation for corners.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. The preconditions here make up the move validator; the
//! postcondition re-checks the game invariants after a move is applied.

use super::action::{Move, MoveError};
use super::invariants::{CornersInvariants, InvariantSet};
use super::rules::reachable_from;
use super::state::GameState;
use super::types::{Color, Coordinate, Piece};
use super::Board;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: a piece stands on the source cell.
pub struct SourceOccupied;

impl SourceOccupied {
    /// Returns the piece found on the source cell.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<Piece, MoveError> {
        board
            .occupant_at(mov.from)?
            .ok_or(MoveError::SourceEmpty(mov.from))
    }
}

/// Precondition: the destination cell is empty.
pub struct DestinationEmpty;

impl DestinationEmpty {
    /// Fails with `DestinationOccupied` if a piece stands there.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        match board.occupant_at(mov.to)? {
            Some(_) => Err(MoveError::DestinationOccupied(mov.to)),
            None => Ok(()),
        }
    }
}

/// Precondition: the piece belongs to the side moving it.
pub struct OwnPiece;

impl OwnPiece {
    /// Fails with `WrongOwner` if `piece` is the other colour.
    #[instrument]
    pub fn check(mov: &Move, piece: Piece) -> Result<(), MoveError> {
        if piece.color() != mov.color {
            Err(MoveError::WrongOwner {
                at: mov.from,
                owner: piece.color(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the destination is a step or the end of a jump chain.
pub struct DestinationReachable;

impl DestinationReachable {
    /// Returns the full reachable set as a byproduct.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<BTreeSet<Coordinate>, MoveError> {
        let reachable = reachable_from(board, mov.from);
        if reachable.contains(&mov.to) {
            Ok(reachable)
        } else {
            Err(MoveError::UnreachableDestination {
                from: mov.from,
                to: mov.to,
            })
        }
    }
}

/// Composite precondition: decides whether a move is legal.
///
/// Cheap checks run first and the first failure is reported; the
/// reachability search only runs once they pass. Never mutates the board.
pub struct MoveValidator;

impl MoveValidator {
    /// Validates a move, returning every destination reachable from its
    /// source.
    #[instrument(skip(board))]
    pub fn validate(mov: &Move, board: &Board) -> Result<BTreeSet<Coordinate>, MoveError> {
        let piece = SourceOccupied::check(mov, board)?;
        DestinationEmpty::check(mov, board)?;
        OwnPiece::check(mov, piece)?;
        let reachable = DestinationReachable::check(mov, board)?;
        debug!(%mov, destinations = reachable.len(), "Move is legal");
        Ok(reachable)
    }

    /// Every destination the piece on `from` could move to.
    ///
    /// Empty if `from` holds no piece.
    #[instrument(skip(board))]
    pub fn reachable(board: &Board, from: Coordinate) -> Result<BTreeSet<Coordinate>, MoveError> {
        match board.occupant_at(from)? {
            Some(_) => Ok(reachable_from(board, from)),
            None => Ok(BTreeSet::new()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Source holds a piece of the mover's colour
/// - Destination is empty and reachable
///
/// Postconditions:
/// - Piece counts per colour are unchanged
/// - Turns still alternate
/// - History still reproduces the board
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        MoveValidator::validate(action, state.board()).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        for color in Color::iter() {
            let (was, now) = (before.board().count_of(color), after.board().count_of(color));
            if was != now {
                warn!(%color, was, now, "Piece count changed across a move");
                return Err(MoveError::InvariantViolation(format!(
                    "Postcondition failed: {} went from {} to {} pieces",
                    color, was, now
                )));
            }
        }

        CornersInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
