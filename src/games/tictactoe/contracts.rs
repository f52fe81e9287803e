//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, RoundInvariants};
use super::round::Round;
use super::{Board, Player, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round has not ended.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects moves once the round is over.
    #[instrument(skip(round))]
    pub fn check(round: &Round) -> Result<(), MoveError> {
        match round.to_move() {
            Some(_) => Ok(()),
            None => Err(MoveError::RoundOver),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        if !round.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves made out of turn.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        if round.to_move() != Some(mov.player) {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        RoundInProgress::check(round)?;
        SquareIsEmpty::check(mov, round)?;
        PlayersTurn::check(mov, round)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Round still running
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Exactly one more move than before
/// - Board remains monotonic
/// - Players still alternate
/// - Turn counter matches history
pub struct MoveContract;

impl Contract<Round, Move> for MoveContract {
    fn pre(round: &Round, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, round)
    }

    fn post(before: &Round, after: &Round) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move not recorded exactly once".to_string(),
            ));
        }

        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Board Balance
// ─────────────────────────────────────────────────────────────

/// Invariant: X has either as many marks as O or exactly one more.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks mark counts on the board.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let count = |player| {
            board
                .squares()
                .iter()
                .filter(|s| **s == Square::Occupied(player))
                .count()
        };
        let x_count = count(Player::X);
        let o_count = count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Asserts that the board balance holds (panic on violation in debug builds).
#[instrument(skip(round))]
pub fn assert_invariants(round: &Round) {
    debug_assert!(BoardConsistent::holds(round.board()), "Board consistency violated");
}
