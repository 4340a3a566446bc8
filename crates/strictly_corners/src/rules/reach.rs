//! Reachability search: every cell a piece can move to in one turn.
//!
//! A turn is either a single step to an adjacent empty cell, or a chain of
//! one or more jumps. A jump leaps over an adjacent occupied cell onto the
//! empty cell directly beyond it. Steps never chain, and a chain never ends
//! with a step.
//!
//! Within one chain a cell may be jumped over at most once. Each branch of
//! the depth-first traversal carries its own jumped-over set, so branches
//! never see each other's history.

use super::super::{Board, Coordinate};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, instrument};

/// One pending jump: leave `launch`, pass over `over`.
#[derive(Debug, Clone)]
struct JumpFrame {
    launch: Coordinate,
    over: Coordinate,
    jumped: BTreeSet<Coordinate>,
}

/// Where the jump from `launch` over `over` lands, if that cell exists and
/// is empty.
pub fn landing(board: &Board, launch: Coordinate, over: Coordinate) -> Option<Coordinate> {
    let target = launch.reflect_through(over)?;
    match board.cell_at(target) {
        Ok(cell) if cell.is_empty() => Some(target),
        _ => None,
    }
}

/// Computes every destination reachable from `from` this turn.
///
/// The board is not modified. The piece on `from` stays put during the
/// search, so `from` is never a destination.
#[instrument(skip(board))]
pub fn reachable_from(board: &Board, from: Coordinate) -> BTreeSet<Coordinate> {
    let mut reached = BTreeSet::new();
    let mut stack = Vec::new();

    for cell in board.neighbors(from) {
        if cell.is_empty() {
            reached.insert(cell.coordinate());
        } else {
            stack.push(JumpFrame {
                launch: from,
                over: cell.coordinate(),
                jumped: BTreeSet::new(),
            });
        }
    }

    let steps = reached.len();
    // (landing, jumped set) pairs whose subtree has been walked.
    let mut explored: HashSet<(Coordinate, BTreeSet<Coordinate>)> = HashSet::new();
    let mut frames = 0usize;

    while let Some(JumpFrame {
        launch,
        over,
        mut jumped,
    }) = stack.pop()
    {
        frames += 1;
        let Some(land) = landing(board, launch, over) else {
            continue;
        };
        reached.insert(land);
        jumped.insert(over);

        if !explored.insert((land, jumped.clone())) {
            continue;
        }

        for cell in board.neighbors(land) {
            let next = cell.coordinate();
            if !cell.is_empty() && !jumped.contains(&next) {
                stack.push(JumpFrame {
                    launch: land,
                    over: next,
                    jumped: jumped.clone(),
                });
            }
        }
    }

    debug!(
        %from,
        steps,
        jumps = reached.len() - steps,
        frames,
        "Reachability search complete"
    );
    reached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn board_with(pieces: &[(usize, usize)]) -> Board {
        let mut board = Board::default();
        for &(column, row) in pieces {
            board.place_piece(Coordinate::new(column, row), Color::White).unwrap();
        }
        board
    }

    fn at(column: usize, row: usize) -> Coordinate {
        Coordinate::new(column, row)
    }

    #[test]
    fn test_lone_piece_steps_only() {
        let board = board_with(&[(3, 3)]);
        let reached = reachable_from(&board, at(3, 3));
        assert_eq!(reached, BTreeSet::from([at(4, 3), at(2, 3), at(3, 4), at(3, 2)]));
    }

    #[test]
    fn test_single_jump() {
        let board = board_with(&[(3, 3), (4, 3)]);
        let reached = reachable_from(&board, at(3, 3));
        assert!(reached.contains(&at(5, 3)));
        assert!(!reached.contains(&at(4, 3)));
    }

    #[test]
    fn test_jump_blocked_by_occupied_landing() {
        let board = board_with(&[(3, 3), (4, 3), (5, 3)]);
        let reached = reachable_from(&board, at(3, 3));
        assert!(!reached.contains(&at(5, 3)));
        assert!(!reached.contains(&at(6, 3)));
    }

    #[test]
    fn test_jump_off_board_is_ignored() {
        let board = board_with(&[(1, 0), (0, 0)]);
        let reached = reachable_from(&board, at(1, 0));
        assert_eq!(reached, BTreeSet::from([at(2, 0), at(1, 1)]));
    }

    #[test]
    fn test_steps_do_not_chain() {
        let board = board_with(&[(3, 3), (5, 3)]);
        let reached = reachable_from(&board, at(3, 3));
        // (4, 3) is a step; (6, 3) would need a step then a jump.
        assert!(reached.contains(&at(4, 3)));
        assert!(!reached.contains(&at(6, 3)));
    }

    #[test]
    fn test_chain_around_a_ring_terminates() {
        // Four pieces on the edge midpoints of a 3x3 square; the source
        // sits on one corner and can circle the ring in both directions.
        let board = board_with(&[(1, 1), (2, 1), (3, 2), (2, 3), (1, 2)]);
        let reached = reachable_from(&board, at(1, 1));
        assert_eq!(
            reached,
            BTreeSet::from([at(0, 1), at(1, 0), at(3, 1), at(3, 3), at(1, 3)])
        );
    }

    #[test]
    fn test_no_bounce_back_over_same_piece() {
        let board = board_with(&[(2, 0), (3, 0)]);
        let reached = reachable_from(&board, at(2, 0));
        assert_eq!(reached, BTreeSet::from([at(1, 0), at(2, 1), at(4, 0)]));
    }

    #[test]
    fn test_chain_collects_every_landing() {
        let board = board_with(&[(2, 2), (2, 3), (3, 4), (4, 3), (3, 2)]);
        let reached = reachable_from(&board, at(2, 2));
        assert!(reached.contains(&at(2, 4)));
        assert!(reached.contains(&at(4, 4)));
        assert!(reached.contains(&at(4, 2)));
        assert!(!reached.contains(&at(2, 2)));
    }

    #[test]
    fn test_landing_requires_empty_cell_on_board() {
        let board = board_with(&[(0, 5), (0, 6), (0, 7)]);
        assert_eq!(landing(&board, at(0, 5), at(0, 6)), None);
        assert_eq!(landing(&board, at(0, 6), at(0, 7)), None);
        assert_eq!(landing(&board, at(0, 6), at(0, 5)), Some(at(0, 4)));
    }
}
