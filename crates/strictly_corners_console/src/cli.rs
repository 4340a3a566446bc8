//! Command-line interface for the corners console.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use strictly_corners::GameConfig;
use tracing::{debug, instrument};

/// Corners - race your pieces into the opposite corner
#[derive(Parser, Debug)]
#[command(name = "corners")]
#[command(about = "Play corners on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the first player
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the second player
    #[arg(long)]
    pub player_two: Option<String>,

    /// Seed for the colour draw (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Builds the game configuration from the file and overrides.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn game_config(&self) -> Result<GameConfig> {
        let config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        let one = self
            .player_one
            .clone()
            .unwrap_or_else(|| config.player_one().clone());
        let two = self
            .player_two
            .clone()
            .unwrap_or_else(|| config.player_two().clone());
        debug!(player_one = %one, player_two = %two, "Resolved player names");
        Ok(config.with_players(one, two))
    }
}
