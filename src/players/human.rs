//! Human player that types moves on the console.

use super::MoveSource;
use crate::console::{Console, Interrupt, parse_coordinate};
use crate::error::SessionError;
use crate::games::tictactoe::{Position, Round};
use tracing::{debug, instrument};

/// Human player entering a row and a column.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl MoveSource for HumanPlayer {
    #[instrument(skip(self, round, console), fields(human = %self.name))]
    fn choose(&mut self, round: &Round, console: &mut Console<'_>) -> Result<Position, Interrupt> {
        let player = round
            .to_move()
            .ok_or_else(|| SessionError::new("No player to move in a finished round"))?;

        console.blank()?;
        console.line(format!("Player {}, play your {}:", player.number(), player))?;
        let row = console.ask("Row: (1, 2, 3) ", parse_coordinate)?;
        let col = console.ask("Column: (1, 2, 3) ", parse_coordinate)?;
        console.blank()?;

        debug!(row, col, "Human entered coordinates");
        Position::from_row_col(row, col)
            .ok_or_else(|| SessionError::new(format!("Coordinates out of range: {row}, {col}")).into())
    }

    fn confirmation(&self, position: Position) -> String {
        format!("You chose row: {}, col: {}.", position.row(), position.col())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
