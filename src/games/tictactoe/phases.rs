//! Round phases and outcomes.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

/// Round-end announcement shown to players.
impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} WINS THIS ROUND!", player),
            Outcome::Draw => write!(f, "NO WINNER THIS ROUND."),
        }
    }
}

/// Turn controller state.
///
/// `RoundOver` is terminal; only a reset returns to `AwaitingMove(Player::X)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the given player to move.
    AwaitingMove(Player),
    /// The round has ended.
    RoundOver(Outcome),
}

impl TurnState {
    /// Returns the player to move, if the round is still running.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            TurnState::AwaitingMove(player) => Some(*player),
            TurnState::RoundOver(_) => None,
        }
    }

    /// Returns the outcome once the round is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            TurnState::AwaitingMove(_) => None,
            TurnState::RoundOver(outcome) => Some(*outcome),
        }
    }
}
