//! Tests for tic-tac-toe positions.

use console_tictactoe::{Board, Player, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_rows_and_columns_are_one_based() {
    assert_eq!((Position::TopLeft.row(), Position::TopLeft.col()), (1, 1));
    assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (2, 3));
    assert_eq!((Position::BottomCenter.row(), Position::BottomCenter.col()), (3, 2));
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board).len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.apply_move(Position::TopLeft, Player::X).unwrap();
    board.apply_move(Position::Center, Player::O).unwrap();

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
