//! Corners - console front end
//!
//! Two players share one terminal and type moves as cell pairs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod draw;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console::ConsoleController;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_corners::GameSession;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.game_config()?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        width = config.width(),
        height = config.height(),
        seed = ?cli.seed,
        "Starting corners"
    );

    let session = GameSession::with_rng(config, rng)?;
    let mut controller = ConsoleController::new(session);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    controller.run(stdin.lock(), stdout.lock())
}
