//! Command-line interface for console_tictactoe.

use clap::Parser;

/// Console Tic-Tac-Toe - play against a friend or a random computer
#[derive(Parser, Debug)]
#[command(name = "console_tictactoe")]
#[command(about = "Command-line tic-tac-toe with a running score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Seed for the computer player's moves (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tracing filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    pub log_filter: Option<String>,
}
