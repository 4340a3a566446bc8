//! Strictly Corners - type-safe rules for the corners board game
//!
//! Two colours start in opposite corner blocks of a rectangular board and
//! race to occupy each other's block. A piece either steps to an adjacent
//! empty cell or jumps over neighbours in a chain. The colour that moves
//! first and finishes first must survive one reply: if the other colour
//! finishes on that reply, the game is a dead heat.
//!
//! # Architecture
//!
//! - **Board**: cells, pieces, and the corner zones
//! - **Rules**: reachability search and win sequencing
//! - **Contracts**: move validation and post-move invariant checks
//! - **Session**: players, colour draw, turn order, and game status
//!
//! # Example
//!
//! ```
//! use strictly_corners::{GameConfig, GameSession, GameStatus};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = GameSession::new(GameConfig::default())?;
//! let status = session.submit_move("E3", "E4")?;
//! assert_eq!(status, GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
pub mod address;
mod board;
mod config;
mod contracts;
pub mod invariants;
pub mod rules;
mod session;
mod snapshot;
mod state;
mod types;
mod zones;

// Crate-level exports - Core types
pub use types::{Cell, Color, Coordinate, Piece};
pub use board::Board;
pub use zones::{Zone, ZoneLayout};

// Crate-level exports - Moves and errors
pub use action::{AddressIssue, Move, MoveError};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MAX_HEIGHT};

// Crate-level exports - Contracts
pub use contracts::{
    Contract, DestinationEmpty, DestinationReachable, MoveContract, MoveValidator, OwnPiece,
    SourceOccupied,
};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, CornersInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, PieceConservationInvariant,
};

// Crate-level exports - Rules
pub use rules::{WinEvaluator, WinState};

// Crate-level exports - Game state and session
pub use session::{GameSession, GameStatus, Player};
pub use snapshot::Snapshot;
pub use state::GameState;
