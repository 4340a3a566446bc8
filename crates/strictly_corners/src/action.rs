//! First-class move and error types.
//!
//! A move is the relocation of one piece. It is validated against a board
//! before anything is mutated, so every error here is recoverable: the caller
//! re-prompts and the session is untouched.

use super::types::{Color, Coordinate};
use serde::{Deserialize, Serialize};

/// A move: the piece of `color` standing on `from` relocates to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Colour of the side making the move.
    pub color: Color,
    /// Source cell.
    pub from: Coordinate,
    /// Destination cell.
    pub to: Coordinate,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.color, self.from, self.to)
    }
}

/// Why a textual address failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum AddressIssue {
    /// Nothing but whitespace.
    #[display("empty address")]
    Empty,
    /// The leading character is not a column letter on this board.
    #[display("bad column letter")]
    BadColumn,
    /// The rank is missing, not a number, or zero.
    #[display("bad row number")]
    BadRow,
    /// Well-formed, but past the board edge.
    #[display("off the board")]
    OffBoard,
}

/// Error that can occur when resolving cells or validating a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The address text does not name a cell.
    #[display("Unknown cell address {:?}: {}", address, issue)]
    UnknownAddress {
        /// The offending text.
        address: String,
        /// What was wrong with it.
        issue: AddressIssue,
    },

    /// The coordinate lies outside the board.
    #[display("Coordinate {:?} is outside the board", _0)]
    OutOfRange(Coordinate),

    /// No piece on the source cell.
    #[display("Source cell {} is empty", _0)]
    SourceEmpty(Coordinate),

    /// The destination already holds a piece.
    #[display("Destination cell {} is already occupied", _0)]
    DestinationOccupied(Coordinate),

    /// The piece belongs to the other side.
    #[display("The piece on {} belongs to {}", at, owner)]
    WrongOwner {
        /// Source cell.
        at: Coordinate,
        /// Colour of the piece found there.
        owner: Color,
    },

    /// Neither a step nor the end of a jump chain.
    #[display("{} cannot reach {}", from, to)]
    UnreachableDestination {
        /// Source cell.
        from: Coordinate,
        /// Requested destination.
        to: Coordinate,
    },

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_uses_addresses() {
        let mov = Move::new(Color::White, Coordinate::new(1, 2), Coordinate::new(1, 3));
        assert_eq!(mov.to_string(), "White: B3 -> B4");
    }

    #[test]
    fn test_error_messages_name_cells() {
        let err = MoveError::WrongOwner {
            at: Coordinate::new(0, 7),
            owner: Color::Black,
        };
        assert_eq!(err.to_string(), "The piece on A8 belongs to Black");

        let err = MoveError::UnknownAddress {
            address: "Z9".to_string(),
            issue: AddressIssue::OffBoard,
        };
        assert!(err.to_string().contains("off the board"));
    }
}
