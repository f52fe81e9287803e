//! Console tic-tac-toe library.
//!
//! A 3x3 game for two humans, or one human against a computer that
//! picks cells at random, with a running score kept across rounds.
//!
//! # Architecture
//!
//! - **Games**: board, win/draw rules, turn controller and move contracts
//! - **Players**: move sources (console human, random computer)
//! - **Console**: line-oriented prompts with the quit signal
//! - **Session**: round loop, replay prompt and score record
//!
//! # Example
//!
//! ```no_run
//! use console_tictactoe::{Console, GameSession, SessionConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let mut console = Console::new(stdin.lock(), std::io::stdout());
//! let mut session = GameSession::from_config(&SessionConfig::default());
//! let end = session.run(&mut console)?;
//! println!("{end}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod error;
mod games;
mod players;
mod score;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Console
pub use console::{
    Console, Continue, Interrupt, InvalidInput, PlayerMode, is_quit, parse_continue,
    parse_coordinate, parse_player_mode,
};

// Crate-level exports - Errors
pub use error::SessionError;

// Crate-level exports - Players
pub use players::{HumanPlayer, MoveSource, RandomComputer};

// Crate-level exports - Scores and session
pub use score::ScoreRecord;
pub use session::{BANNER, GameSession, SPACE_TAKEN, SessionEnd};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Contract, FIRST_TURN, Invariant, InvariantSet, InvariantViolation, LegalMove, Move,
    MoveContract, MoveError, Outcome, Player, Position, Round, RoundInvariants, Square, TurnState,
    WinResult, evaluate, is_draw, is_full,
};
