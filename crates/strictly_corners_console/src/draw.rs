//! Text rendering of a session.

use strictly_corners::address::COLUMN_LETTERS;
use strictly_corners::{Color, GameStatus, Snapshot};

/// Glyph for a White piece.
pub const WHITE_PIECE: &str = " x ";
/// Glyph for a Black piece.
pub const BLACK_PIECE: &str = " o ";
/// Glyph for an empty cell.
pub const EMPTY_CELL: &str = " _ ";

fn glyph(color: Option<Color>) -> &'static str {
    match color {
        Some(Color::White) => WHITE_PIECE,
        Some(Color::Black) => BLACK_PIECE,
        None => EMPTY_CELL,
    }
}

/// Draws the board: ranks from the top, column letters underneath.
pub fn board(snapshot: &Snapshot) -> String {
    let margin = snapshot.height.to_string().len();
    let mut out = String::new();

    for (index, row) in snapshot.rows.iter().enumerate() {
        let rank = snapshot.height - index;
        out.push_str(&format!("{:>margin$}", rank));
        for &cell in row {
            out.push_str(glyph(cell));
        }
        out.push('\n');
    }

    out.push_str(&" ".repeat(margin));
    for &letter in COLUMN_LETTERS.iter().take(snapshot.width) {
        out.push_str(&format!(" {} ", letter as char));
    }
    out.push('\n');
    out
}

/// Line naming the player to move.
pub fn header(snapshot: &Snapshot) -> String {
    let active = &snapshot.active;
    format!(
        "{} [{} \"{}\"], it's your turn!",
        active.name(),
        active.color(),
        glyph(Some(active.color())).trim()
    )
}

/// Extra line for a game waiting on its last reply.
pub fn warning(status: &GameStatus) -> Option<String> {
    match status {
        GameStatus::PendingConfirmation(closer) => Some(format!(
            "{} has filled the corner. One reply left to draw level!",
            closer.name()
        )),
        _ => None,
    }
}

/// Announces the result of a finished game.
pub fn proclaim(status: &GameStatus) -> Option<String> {
    let verdict = match status {
        GameStatus::Finished(winner) => format!("{} wins!", winner.name()),
        GameStatus::DeadHeat => "Dead heat!".to_string(),
        _ => return None,
    };
    Some(format!("----------------\nGame over!\n{}", verdict))
}
