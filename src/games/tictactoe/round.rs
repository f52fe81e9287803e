//! Turn controller for a single round of tic-tac-toe.
//!
//! A [`Round`] owns the board, the turn counter and the move history.
//! It moves between [`TurnState::AwaitingMove`] and the terminal
//! [`TurnState::RoundOver`]; only [`Round::reset`] leaves the terminal state.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract, assert_invariants};
use super::phases::{Outcome, TurnState};
use super::rules::{WinResult, evaluate, is_full};
use super::{Board, Player, Position};
use tracing::{debug, info, instrument};

/// Turn counter value at the start of every round.
pub const FIRST_TURN: u8 = 1;

/// One round: board, turn counter, active player and history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(super) board: Board,
    pub(super) turn: u8,
    pub(super) state: TurnState,
    pub(super) history: Vec<Move>,
}

impl Round {
    /// Creates a fresh round with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: FIRST_TURN,
            state: TurnState::AwaitingMove(Player::X),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn counter (1 before the first move).
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// Returns the turn controller state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the current player to move, or `None` once the round is over.
    pub fn to_move(&self) -> Option<Player> {
        self.state.to_move()
    }

    /// Returns the outcome once the round is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns positions that are still empty.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Places the active player's mark at `position`.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn place(&mut self, position: Position) -> Result<TurnState, MoveError> {
        let player = self.to_move().ok_or(MoveError::RoundOver)?;
        self.make_move(Move::new(player, position))
    }

    /// Applies a move and advances the turn state.
    ///
    /// A rejected move leaves the board, turn counter and active player
    /// exactly as they were.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn make_move(&mut self, action: Move) -> Result<TurnState, MoveError> {
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.apply_move(action.position, action.player)?;
        self.history.push(action);
        self.turn += 1;
        debug!(%action, turn = self.turn, "Move accepted");

        self.state = match evaluate(&self.board) {
            WinResult::Winner(winner) => {
                info!(%winner, "Round won");
                TurnState::RoundOver(Outcome::Winner(winner))
            }
            WinResult::NoWinner if is_full(&self.board) => {
                info!("Round drawn");
                TurnState::RoundOver(Outcome::Draw)
            }
            WinResult::NoWinner => TurnState::AwaitingMove(action.player.opponent()),
        };

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        assert_invariants(self);

        Ok(self.state)
    }

    /// Returns the round to its initial state regardless of how it ended.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = FIRST_TURN;
        self.state = TurnState::AwaitingMove(Player::X);
        self.history.clear();
    }

    /// Replays moves from a fresh round, stopping at the first rejection.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut round = Self::new();
        for action in moves {
            round.make_move(*action)?;
        }
        Ok(round)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
