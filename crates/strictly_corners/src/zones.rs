//! Corner zones: where each colour starts and where it must finish.

use super::board::Board;
use super::config::GameConfig;
use super::types::{Color, Coordinate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// An immutable set of cells forming one corner cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    cells: BTreeSet<Coordinate>,
}

impl Zone {
    /// Builds the rectangular block `columns x rows`.
    fn block(columns: std::ops::Range<usize>, rows: std::ops::Range<usize>) -> Self {
        let cells = columns
            .flat_map(|column| rows.clone().map(move |row| Coordinate::new(column, row)))
            .collect();
        Self { cells }
    }

    /// Returns true if the coordinate belongs to the zone.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.cells.contains(&coordinate)
    }

    /// Number of cells in the zone.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the zone has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates cells in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }

    /// Returns true if every cell of the zone holds a piece of `color`.
    pub fn is_filled_by(&self, board: &Board, color: Color) -> bool {
        self.cells.iter().all(|&coordinate| {
            matches!(board.occupant_at(coordinate), Ok(Some(piece)) if piece.color() == color)
        })
    }
}

/// Start zones for both colours, computed once per configuration.
///
/// White starts in the bottom-right block and Black in the top-left block.
/// A colour's target is the other colour's start zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneLayout {
    white: Zone,
    black: Zone,
}

impl ZoneLayout {
    /// Computes the layout for a validated configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        let (width, height) = (config.width(), config.height());
        let (zone_width, zone_depth) = (config.zone_width(), config.zone_depth());
        Self {
            white: Zone::block(width.saturating_sub(zone_width)..width, 0..zone_depth),
            black: Zone::block(0..zone_width, height.saturating_sub(zone_depth)..height),
        }
    }

    /// Where `color` starts.
    pub fn start_of(&self, color: Color) -> &Zone {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Where `color` must finish.
    pub fn target_of(&self, color: Color) -> &Zone {
        self.start_of(color.opponent())
    }

    /// Pieces each colour owns for the whole game.
    pub fn pieces_per_color(&self) -> usize {
        self.white.len()
    }
}
