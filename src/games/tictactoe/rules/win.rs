//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::{instrument, warn};

/// Result of evaluating every line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinResult {
    /// No line is completed by a single player.
    NoWinner,
    /// The player owns a full line.
    Winner(Player),
}

/// The 8 winning lines: rows top-to-bottom, columns left-to-right,
/// main diagonal, anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the player owning all three squares of `line`, if any.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    match board.get(a) {
        Square::Occupied(player)
            if board.get(b) == Square::Occupied(player)
                && board.get(c) == Square::Occupied(player) =>
        {
            Some(player)
        }
        _ => None,
    }
}

/// Evaluates all 8 lines of the board.
///
/// Every line is inspected on every call. If more than one line is
/// complete the first in [`LINES`] order decides the result.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> WinResult {
    let owners: Vec<Player> = LINES
        .iter()
        .filter_map(|line| line_owner(board, *line))
        .collect();

    match owners.as_slice() {
        [] => WinResult::NoWinner,
        [first, rest @ ..] => {
            if rest.iter().any(|p| p != first) {
                warn!(?owners, "Both players own a completed line");
            }
            WinResult::Winner(*first)
        }
    }
}
