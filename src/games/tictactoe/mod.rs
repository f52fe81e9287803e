//! Tic-tac-toe game engine: board, rules, turn controller and contracts.

mod action;
mod contracts;
mod invariants;
mod phases;
mod position;
mod round;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, RoundInvariants};
pub use phases::{Outcome, TurnState};
pub use position::Position;
pub use round::{FIRST_TURN, Round};
pub use rules::{WinResult, evaluate, is_draw, is_full};
pub use types::{Board, Player, Square};
