//! Cumulative scores across rounds.

use crate::games::tictactoe::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Rounds won by each player during the current process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Rounds won by player 1 (X).
    player_one: u32,
    /// Rounds won by player 2 (O).
    player_two: u32,
}

impl ScoreRecord {
    /// Creates an all-zero record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.player_one,
            Player::O => self.player_two,
        }
    }

    /// Credits the winner of a finished round. Draws change nothing.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        let Some(winner) = outcome.winner() else {
            return;
        };
        let slot = match winner {
            Player::X => &mut self.player_one,
            Player::O => &mut self.player_two,
        };
        *slot = slot.saturating_add(1);
        info!(%winner, player_one = self.player_one, player_two = self.player_two, "Score updated");
    }

    /// Zeroes both counters.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The score block printed after every round.
impl std::fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "OVERALL SCORE:")?;
        writeln!(f, "Player 1: {}", self.player_one)?;
        write!(f, "Player 2: {}", self.player_two)
    }
}
