//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Player {
    /// Player 1, marks with X and always moves first.
    #[display("X")]
    X,
    /// Player 2, marks with O.
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Logical player number shown to users (X is 1, O is 2).
    pub fn number(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `player`'s mark on an empty square.
    ///
    /// Fails with [`MoveError::SquareOccupied`] and leaves the board
    /// untouched when the square already holds a mark.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Overwrites a square without checks.
    ///
    /// Only used by tests that need to build corrupted states.
    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

/// Renders the board the way the console shows it: three indented rows
/// of five-character cells separated by blank lines.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const INDENT: &str = "      ";
        writeln!(f)?;
        for (row, cells) in self.squares.chunks(3).enumerate() {
            write!(f, "{INDENT}")?;
            for square in cells {
                match square {
                    Square::Empty => write!(f, "  -  ")?,
                    Square::Occupied(player) => write!(f, "  {player}  ")?,
                }
            }
            writeln!(f)?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
