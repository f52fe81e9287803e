//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Round};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Verified by replaying the move history onto an empty board and
/// comparing the result with the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<Round> for MonotonicBoardInvariant {
    fn holds(round: &Round) -> bool {
        let mut reconstructed = Board::new();

        for mov in round.history() {
            if reconstructed.apply_move(mov.position, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *round.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    #[test]
    fn test_fresh_round_holds() {
        assert!(MonotonicBoardInvariant::holds(&Round::new()));
    }

    #[test]
    fn test_single_move_holds() {
        let mut round = Round::new();
        round.place(Position::Center).unwrap();
        assert!(MonotonicBoardInvariant::holds(&round));
    }

    #[test]
    fn test_overwritten_square_detected() {
        let mut round = Round::new();
        round.place(Position::Center).unwrap();
        round.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&round));
    }
}
