//! Game rules for corners.
//!
//! Pure functions and small state machines evaluated against a board.
//! Rules are separated from board storage so contracts and the session can
//! compose them.

pub mod reach;
pub mod win;

pub use reach::{landing, reachable_from};
pub use win::{WinEvaluator, WinState};
