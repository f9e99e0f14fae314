//! End-to-end transcripts for tic-tac-toe.

use parlor::console::{Console, Ending, SessionReport};
use parlor::tictactoe::presenter::{DRAW, WELCOME};
use parlor::{Command, play};
use std::io::Cursor;

fn tictactoe(input: &str) -> (SessionReport, String) {
    let mut console = Console::new(Cursor::new(input), Vec::new());
    let report = play(&Command::Tictactoe, &mut console).unwrap();
    assert_eq!(report.game(), "Tic-Tac-Toe");
    (report, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn test_x_wins_top_row() {
    let (report, out) = tictactoe("1\n5\n2\n6\n3\nn\n");

    assert!(out.starts_with(WELCOME));
    assert!(out.contains("Congratulations! Player X wins!"));
    assert!(!out.contains(DRAW));
    assert_eq!(out.matches("Player X, enter your move (1-9): ").count(), 3);
    assert_eq!(out.matches("Player O, enter your move (1-9): ").count(), 2);
    assert!(out.contains(" X | X | X"));
    assert_eq!(*report.finished(), 1);
    assert_eq!(*report.ending(), Ending::Declined);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let (_, out) = tictactoe("1\n2\n3\n5\n4\n6\n8\n7\n9\nn\n");

    assert!(out.contains(DRAW));
    assert!(!out.contains("wins!"));
}

#[test]
fn test_occupied_square_keeps_turn() {
    let (report, out) = tictactoe("5\n5\nfive\n10\n99999999999\n1\n");

    assert!(out.contains("Position already taken! Please choose another position."));
    assert!(out.contains("Invalid input! Please enter a number between 1 and 9."));
    assert!(out.contains("Invalid position! Please enter a number between 1 and 9."));
    assert!(out.contains("Number too large! Please enter a number between 1 and 9."));
    assert_eq!(out.matches("Player O, enter your move (1-9): ").count(), 5);
    assert_eq!(*report.ending(), Ending::EndOfInput);
}

#[test]
fn test_replay_resets_board() {
    let (report, out) = tictactoe("1\n5\n2\n6\n3\nyes\n4\n7\n5\n8\n6\nn\n");

    assert!(out.contains("Congratulations! Player X wins!"));
    assert_eq!(out.matches("wins!").count(), 2);
    assert_eq!(*report.rounds(), 2);
    assert_eq!(*report.finished(), 2);
}
