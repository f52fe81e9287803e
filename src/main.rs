//! Console Tic-Tac-Toe
//!
//! Reads moves from stdin, writes the game to stdout and logs to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console_tictactoe::{Console, GameSession, SessionConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    }
    .with_overrides(cli.seed, cli.log_filter);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "Configuration resolved");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let mut session = GameSession::from_config(&config);
    let end = session.run(&mut console)?;
    info!(%end, "Exiting");

    Ok(())
}
