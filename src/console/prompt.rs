//! Token parsing for console prompts.
//!
//! Every prompt accepts a small fixed token set. Anything else is an
//! [`InvalidInput`] and the prompt is re-issued.

use crate::games::tictactoe::Player;
use derive_more::Display;
use tracing::instrument;

/// Input that does not belong to a prompt's accepted token set.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidInput {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,
    /// Text outside the accepted tokens.
    #[display("Unrecognized input: {:?}", _0)]
    Unrecognized(String),
}

impl std::error::Error for InvalidInput {}

/// Answer to the continue prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continue {
    /// Start another round.
    Yes,
    /// End the session.
    No,
}

/// Who controls player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum PlayerMode {
    /// One human against the random computer.
    #[display("1 player")]
    Single,
    /// Two humans sharing the console.
    #[default]
    #[display("2 players")]
    Double,
}

impl PlayerMode {
    /// Whether `player` is driven by the computer in this mode.
    pub fn is_computer(self, player: Player) -> bool {
        self == PlayerMode::Single && player == Player::O
    }
}

fn first_char(input: &str) -> Option<char> {
    input.chars().next().map(|c| c.to_ascii_lowercase())
}

/// Returns true when the input's first character is `q` or `e`.
#[instrument]
pub fn is_quit(input: &str) -> bool {
    matches!(first_char(input), Some('q' | 'e'))
}

/// Parses the continue prompt: first character `y` or `n`, any case.
#[instrument]
pub fn parse_continue(input: &str) -> Result<Continue, InvalidInput> {
    match first_char(input) {
        None => Err(InvalidInput::Empty),
        Some('y') => Ok(Continue::Yes),
        Some('n') => Ok(Continue::No),
        Some(_) => Err(InvalidInput::Unrecognized(input.to_string())),
    }
}

/// Parses the player-count prompt: exactly `1` or `2`.
#[instrument]
pub fn parse_player_mode(input: &str) -> Result<PlayerMode, InvalidInput> {
    match input {
        "" => Err(InvalidInput::Empty),
        "1" => Ok(PlayerMode::Single),
        "2" => Ok(PlayerMode::Double),
        other => Err(InvalidInput::Unrecognized(other.to_string())),
    }
}

/// Parses a row or column: exactly `1`, `2` or `3`.
#[instrument]
pub fn parse_coordinate(input: &str) -> Result<u8, InvalidInput> {
    match input {
        "" => Err(InvalidInput::Empty),
        "1" => Ok(1),
        "2" => Ok(2),
        "3" => Ok(3),
        other => Err(InvalidInput::Unrecognized(other.to_string())),
    }
}
