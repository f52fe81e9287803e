//! Computer player that picks cells uniformly at random.

use super::MoveSource;
use crate::console::{Console, Interrupt};
use crate::error::SessionError;
use crate::games::tictactoe::{Position, Round};
use rand::Rng;
use tracing::{debug, instrument};

/// Computer opponent drawing row and column independently from `1..=3`.
///
/// Occupied cells are not filtered out: a pick on a taken cell is
/// rejected by the round and the computer simply draws again.
#[derive(Debug, Clone)]
pub struct RandomComputer<R> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomComputer<R> {
    /// Creates a computer player using `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Draws one cell uniformly from all 9.
    #[instrument(skip(self), fields(ai = %self.name))]
    pub fn pick(&mut self) -> Result<Position, SessionError> {
        let row = self.rng.gen_range(1..=3);
        let col = self.rng.gen_range(1..=3);
        debug!(row, col, "Computer drew coordinates");
        Position::from_row_col(row, col)
            .ok_or_else(|| SessionError::new(format!("Coordinates out of range: {row}, {col}")))
    }
}

impl<R: Rng> MoveSource for RandomComputer<R> {
    fn choose(&mut self, _round: &Round, _console: &mut Console<'_>) -> Result<Position, Interrupt> {
        Ok(self.pick()?)
    }

    fn confirmation(&self, position: Position) -> String {
        format!("Computer chose row: {}, col: {}.", position.row(), position.col())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, MoveError, Outcome, Player, Square};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_picks_cover_the_whole_board() {
        let mut computer = RandomComputer::new("Computer", StdRng::seed_from_u64(7));
        let seen: HashSet<Position> = (0..500).map(|_| computer.pick().unwrap()).collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_retries_until_the_last_empty_cell() {
        use Player::{O, X};
        // X O X / X O O / O X _ with X to fill the last cell.
        let moves = [
            Move::new(X, Position::TopLeft),
            Move::new(O, Position::TopCenter),
            Move::new(X, Position::TopRight),
            Move::new(O, Position::Center),
            Move::new(X, Position::MiddleLeft),
            Move::new(O, Position::MiddleRight),
            Move::new(X, Position::BottomCenter),
            Move::new(O, Position::BottomLeft),
        ];
        let mut round = Round::replay(&moves).unwrap();
        assert_eq!(round.valid_moves(), vec![Position::BottomRight]);

        let mut computer = RandomComputer::new("Computer", StdRng::seed_from_u64(1));
        let mut console = Console::new(std::io::empty(), std::io::sink());
        let mut rejected = 0;
        loop {
            let pos = computer.choose(&round, &mut console).unwrap();
            match round.place(pos) {
                Ok(_) => break,
                Err(MoveError::SquareOccupied(_)) => rejected += 1,
                Err(other) => panic!("unexpected rejection: {other}"),
            }
            assert!(rejected < 10_000, "computer never found the empty cell");
        }
        assert_eq!(round.board().get(Position::BottomRight), Square::Occupied(X));
        assert_eq!(round.outcome(), Some(Outcome::Draw));
        assert_eq!(round.turn(), 10);
    }

    #[test]
    fn test_confirmation_text() {
        let computer = RandomComputer::new("Computer", StdRng::seed_from_u64(0));
        assert_eq!(
            computer.confirmation(Position::TopCenter),
            "Computer chose row: 1, col: 2."
        );
    }
}
