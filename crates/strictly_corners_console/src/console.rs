//! Read-eval-print loop driving a session from text input.

use crate::draw;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use strictly_corners::{GameSession, address};
use tracing::{debug, info, instrument};

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the piece on the first address to the second.
    Move(String, String),
    /// List destinations for the piece on an address.
    Hint(String),
    /// Start a new game.
    New,
    /// Leave.
    Quit,
}

impl Command {
    /// Parses one line. Keywords are case-insensitive.
    pub fn parse(line: &str) -> Result<Self, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [word] if word.eq_ignore_ascii_case("quit") => Ok(Command::Quit),
            [word] if word.eq_ignore_ascii_case("new") => Ok(Command::New),
            [word, cell] if word.eq_ignore_ascii_case("hint") => {
                Ok(Command::Hint(cell.to_string()))
            }
            [from, to] => Ok(Command::Move(from.to_string(), to.to_string())),
            [] => Err("Enter a move, e.g. B3 B4".to_string()),
            _ => Err(format!("Unrecognised command: {}", line.trim())),
        }
    }
}

/// Console controller: draws the board, reads commands, reports results.
pub struct ConsoleController<R: Rng> {
    session: GameSession<R>,
}

impl<R: Rng> ConsoleController<R> {
    /// Wraps a session.
    pub fn new(session: GameSession<R>) -> Self {
        Self { session }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
        let mut line = String::new();
        loop {
            self.draw(&mut output)?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, &mut output)?,
                Err(message) => writeln!(output, "{}", message)?,
            }
        }
        info!(moves = self.session.history().len(), "Leaving console");
        Ok(())
    }

    fn draw(&self, output: &mut impl Write) -> Result<()> {
        let snapshot = self.session.snapshot();
        write!(output, "{}", draw::board(&snapshot))?;

        if let Some(verdict) = draw::proclaim(&snapshot.status) {
            writeln!(output, "{}", verdict)?;
            writeln!(output, "Type \"new\" to play again or \"quit\" to leave")?;
        } else {
            writeln!(output, "{}", draw::header(&snapshot))?;
            if let Some(warning) = draw::warning(&snapshot.status) {
                writeln!(output, "{}", warning)?;
            }
            writeln!(output, "Enter a move, e.g. B3 B4")?;
        }
        output.flush()?;
        Ok(())
    }

    fn execute(&mut self, command: Command, output: &mut impl Write) -> Result<()> {
        match command {
            Command::Move(from, to) => {
                if let Err(e) = self.session.submit_move(&from, &to) {
                    writeln!(output, "Error: {}", e)?;
                }
            }
            Command::Hint(cell) => match self.session.reachable_from(&cell) {
                Ok(reachable) if reachable.is_empty() => {
                    writeln!(output, "No moves from {}", cell.to_uppercase())?;
                }
                Ok(reachable) => {
                    let cells: Vec<String> = reachable.into_iter().map(address::format).collect();
                    writeln!(output, "{} can reach: {}", cell.to_uppercase(), cells.join(" "))?;
                }
                Err(e) => writeln!(output, "Error: {}", e)?,
            },
            Command::New => self.session.start_game(),
            Command::Quit => {}
        }
        Ok(())
    }
}
