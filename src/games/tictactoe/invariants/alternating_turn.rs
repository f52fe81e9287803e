//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Player, Round};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the round is
/// running, the player to move must follow the last entry.
pub struct AlternatingTurnInvariant;

impl Invariant<Round> for AlternatingTurnInvariant {
    fn holds(round: &Round) -> bool {
        let history = round.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        match round.to_move() {
            None => true,
            Some(to_move) => {
                let expected = if history.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                to_move == expected
            }
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
