//! Scripted console sessions.

use console_tictactoe::{
    BANNER, Console, GameSession, Player, SPACE_TAKEN, SessionConfig, SessionEnd,
};
use std::io::Cursor;

fn session() -> GameSession {
    GameSession::from_config(&SessionConfig::default().with_overrides(Some(3), None))
}

/// Runs `session` against raw input bytes.
fn play_bytes(session: &mut GameSession, script: &[u8]) -> (SessionEnd, String) {
    let mut out = Vec::new();
    let end = {
        let mut console = Console::new(Cursor::new(script.to_vec()), &mut out);
        session.run(&mut console).expect("session runs")
    };
    (end, String::from_utf8(out).expect("utf-8 transcript"))
}

/// Runs `session` against `script`, returning how it ended and the transcript.
fn play(session: &mut GameSession, script: &str) -> (SessionEnd, String) {
    let mut out = Vec::new();
    let end = {
        let mut console = Console::new(Cursor::new(script.to_string()), &mut out);
        session.run(&mut console).expect("session runs")
    };
    (end, String::from_utf8(out).expect("utf-8 transcript"))
}

/// Two-player round where X takes the top row.
const X_WINS: &str = "y\n2\n1\n1\n2\n1\n1\n2\n3\n3\n1\n3\n";

#[test]
fn test_declining_ends_session() {
    let mut session = session();
    let (end, out) = play(&mut session, "n\n");
    assert_eq!(end, SessionEnd::Declined);
    assert_eq!(out, format!("{BANNER}\nContinue? (y/n) "));
}

#[test]
fn test_invalid_continue_reshows_banner() {
    let mut session = session();
    let (end, out) = play(&mut session, "\nmaybe\nN\n");
    assert_eq!(end, SessionEnd::Declined);
    assert_eq!(out.matches("TIC\n").count(), 3);
}

#[test]
fn test_quit_at_player_count() {
    let mut session = session();
    let (end, out) = play(&mut session, "y\n3\nexit\n");
    assert_eq!(end, SessionEnd::Quit);
    assert!(out.ends_with("1 or 2 players? (1/2) 1 or 2 players? (1/2) "));
}

#[test]
fn test_quit_at_row_prompt_leaves_board_untouched() {
    let mut session = session();
    let (end, out) = play(&mut session, "y\n2\nq\n");
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(session.round().board().occupied(), 0);
    assert_eq!(session.round().turn(), 1);
    assert!(out.ends_with("Player 1, play your X:\nRow: (1, 2, 3) "));
}

#[test]
fn test_two_player_win_updates_score() {
    let mut session = session();
    let (end, out) = play(&mut session, X_WINS);

    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(session.wins(Player::X), 1);
    assert_eq!(session.wins(Player::O), 0);
    assert!(out.contains("You chose row: 1, col: 3.\n"));
    assert!(out.contains("X WINS THIS ROUND!\n\nOVERALL SCORE:\nPlayer 1: 1\nPlayer 2: 0\n\n"));
    // The score block is followed by the banner for the next round.
    assert!(out.ends_with(&format!("Player 2: 0\n\n{BANNER}\nContinue? (y/n) ")));
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let mut session = session();
    let script = format!("{X_WINS}{X_WINS}n\n");
    let (end, out) = play(&mut session, &script);

    assert_eq!(end, SessionEnd::Declined);
    assert_eq!(session.wins(Player::X), 2);
    assert!(out.contains("Player 1: 2\nPlayer 2: 0\n"));
}

#[test]
fn test_occupied_cell_reprompts_same_player() {
    let mut session = session();
    // X takes the center, O tries it too, then quits.
    let (end, out) = play(&mut session, "y\n2\n2\n2\n2\n2\nq\n");

    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(session.round().turn(), 2);
    assert_eq!(session.round().to_move(), Some(Player::O));
    assert!(out.contains(&format!("{SPACE_TAKEN}\n\n")));
    assert_eq!(out.matches("Player 2, play your O:").count(), 2);
}

#[test]
fn test_draw_leaves_scores_unchanged() {
    let mut session = session();
    // X O X / X O O / O X X
    let script = "y\n2\n1\n1\n1\n2\n1\n3\n2\n2\n2\n1\n2\n3\n3\n2\n3\n1\n3\n3\nn\n";
    let (end, out) = play(&mut session, script);

    assert_eq!(end, SessionEnd::Declined);
    assert!(out.contains("NO WINNER THIS ROUND.\n\nOVERALL SCORE:\nPlayer 1: 0\nPlayer 2: 0\n"));
    assert_eq!(session.wins(Player::X), 0);
    assert_eq!(session.wins(Player::O), 0);
}

#[test]
fn test_single_player_computer_moves() {
    let mut session = session();
    // Human plays the center and then the input ends.
    let (end, out) = play(&mut session, "y\n1\n2\n2\n");

    assert_eq!(end, SessionEnd::InputClosed);
    assert!(out.contains("You chose row: 2, col: 2.\n"));
    assert!(out.contains("Computer chose row: "));
    assert_eq!(session.round().turn(), 3);
    assert_eq!(session.round().to_move(), Some(Player::X));
}

#[test]
fn test_new_round_keeps_scores_and_reset_scores_clears_them() {
    let mut session = session();
    play(&mut session, X_WINS);
    assert_eq!(session.wins(Player::X), 1);

    session.new_round(console_tictactoe::PlayerMode::Double);
    assert_eq!(session.round().turn(), 1);
    assert_eq!(session.round().board().occupied(), 0);
    assert_eq!(session.wins(Player::X), 1);

    session.reset_scores();
    assert_eq!(session.wins(Player::X), 0);
}

#[test]
fn test_quit_at_continue_prompt() {
    let mut session = session();
    let (end, out) = play(&mut session, "Quit\n");
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(out, format!("{BANNER}\nContinue? (y/n) "));
}

#[test]
fn test_quit_at_column_prompt() {
    let mut session = session();
    let (end, out) = play(&mut session, "y\n2\n1\nE\n");
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(session.round().board().occupied(), 0);
    assert_eq!(session.round().turn(), 1);
    assert!(out.ends_with("Row: (1, 2, 3) Column: (1, 2, 3) "));
}

#[test]
fn test_invalid_utf8_at_row_prompt_reprompts() {
    let mut session = session();
    let (end, out) = play_bytes(&mut session, b"y\n2\n\xff\n1\n1\nq\n");
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(out.matches("Row: (1, 2, 3) ").count(), 3);
    assert!(out.contains("You chose row: 1, col: 1.\n"));
    assert_eq!(session.round().turn(), 2);
}
