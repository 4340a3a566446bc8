//! Letter+rank cell addresses ("A1" .. "H8").
//!
//! Addressing is a lookup concern only. Move logic never parses text; it
//! works on [`Coordinate`]s.

use super::action::{AddressIssue, MoveError};
use super::types::Coordinate;
use tracing::instrument;

/// Column letters, one per board column.
pub const COLUMN_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Formats a coordinate as its textual address.
///
/// Row numbers are 1-based from the bottom: `(0, 0)` is `"A1"`.
pub fn format(coordinate: Coordinate) -> String {
    let letter = COLUMN_LETTERS
        .get(coordinate.column)
        .map(|&b| b as char)
        .unwrap_or('?');
    format!("{}{}", letter, coordinate.row + 1)
}

/// Parses an address for a board of the given dimensions.
///
/// Case-insensitive, surrounding whitespace ignored.
#[instrument]
pub fn parse(text: &str, width: usize, height: usize) -> Result<Coordinate, MoveError> {
    let fail = |issue| MoveError::UnknownAddress {
        address: text.to_string(),
        issue,
    };

    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let letter = chars.next().ok_or_else(|| fail(AddressIssue::Empty))?;
    if !letter.is_ascii_alphabetic() {
        return Err(fail(AddressIssue::BadColumn));
    }
    let column = (letter.to_ascii_uppercase() as u8 - b'A') as usize;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(fail(AddressIssue::BadRow));
    }
    let rank: usize = digits.parse().map_err(|_| fail(AddressIssue::BadRow))?;
    if rank == 0 {
        return Err(fail(AddressIssue::BadRow));
    }

    if column >= width || rank > height {
        return Err(fail(AddressIssue::OffBoard));
    }

    Ok(Coordinate::new(column, rank - 1))
}
