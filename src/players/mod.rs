//! Move sources: where each player's next move comes from.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomComputer;

use crate::console::{Console, Interrupt};
use crate::games::tictactoe::{Position, Round};

/// Trait for anything that can pick a move for the active player.
pub trait MoveSource {
    /// Picks a position for the player to move in `round`.
    ///
    /// The position is not guaranteed to be empty; the caller validates it.
    fn choose(&mut self, round: &Round, console: &mut Console<'_>) -> Result<Position, Interrupt>;

    /// Line printed once a chosen move has been accepted.
    fn confirmation(&self, position: Position) -> String;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}
