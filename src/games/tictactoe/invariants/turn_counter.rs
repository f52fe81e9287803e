//! Turn counter invariant: the counter tracks accepted moves.

use super::super::{Round, round::FIRST_TURN};
use super::Invariant;

/// Invariant: turn counter equals history length plus one, and history
/// length equals the number of occupied squares.
pub struct TurnCounterInvariant;

impl Invariant<Round> for TurnCounterInvariant {
    fn holds(round: &Round) -> bool {
        let moves = round.history().len();
        usize::from(round.turn()) == moves + usize::from(FIRST_TURN)
            && round.board().occupied() == moves
    }

    fn description() -> &'static str {
        "Turn counter matches accepted moves and occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_counter_tracks_moves() {
        let mut round = Round::new();
        assert!(TurnCounterInvariant::holds(&round));
        round.place(Position::Center).unwrap();
        round.place(Position::TopLeft).unwrap();
        assert!(TurnCounterInvariant::holds(&round));
    }

    #[test]
    fn test_skipped_increment_detected() {
        let mut round = Round::new();
        round.place(Position::Center).unwrap();
        round.turn -= 1;
        assert!(!TurnCounterInvariant::holds(&round));
    }
}
