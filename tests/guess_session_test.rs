//! End-to-end transcripts for the number guessing game.

use parlor::console::{Console, Ending, SessionReport, YES_NO_RETRY};
use parlor::guess::presenter::{CUSTOM_RANGE_PROMPT, FAREWELL, TITLE};
use parlor::{Command, guess_settings, play};
use std::io::Cursor;

fn guess(min: i32, max: i32, input: &str) -> (SessionReport, String) {
    let command = Command::Guess {
        min: Some(min),
        max: Some(max),
        seed: Some(42),
    };
    let mut console = Console::new(Cursor::new(input), Vec::new());
    let report = play(&command, &mut console).unwrap();
    assert_eq!(report.game(), "Number Guessing");
    (report, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn test_single_value_range_won_on_first_try() {
    let (report, out) = guess(1, 1, "1\nn\n");

    assert!(out.starts_with(TITLE));
    assert!(!out.contains(CUSTOM_RANGE_PROMPT));
    assert!(out.contains("I'm thinking of a number between 1 and 1."));
    assert!(out.contains("\nAttempt #1: "));
    assert!(out.contains("The number was 1\nIt took you 1 attempt(s)."));
    assert!(out.contains("Amazing! You got it on the first try!"));
    assert!(out.ends_with(&format!("{}\n", FAREWELL)));

    assert_eq!(*report.rounds(), 1);
    assert_eq!(*report.finished(), 1);
    assert_eq!(*report.ending(), Ending::Declined);
}

#[test]
fn test_rejected_guesses_do_not_count() {
    let (report, out) = guess(3, 3, "abc\n0\n99999999999\n3\nno\n");

    assert!(out.contains("Invalid input! Please enter a valid number or 'quit'."));
    assert!(out.contains("Please enter a number between 3 and 3."));
    assert!(out.contains("Number too large! Please enter a number between 3 and 3."));
    assert!(out.contains("It took you 1 attempt(s)."));
    assert!(!out.contains("Attempt #2"));
    assert_eq!(*report.ending(), Ending::Declined);
}

#[test]
fn test_quit_ends_session_mid_round() {
    let (report, out) = guess(1, 100, "quit\n");

    assert_eq!(*report.ending(), Ending::Quit);
    assert_eq!(*report.rounds(), 1);
    assert_eq!(*report.finished(), 0);
    assert!(!out.contains("play again"));
    assert!(out.ends_with(&format!("{}\n", FAREWELL)));
}

#[test]
fn test_uppercase_quit_is_rejected() {
    let (report, out) = guess(1, 100, "QUIT\nq\n");

    assert!(out.contains("Invalid input! Please enter a valid number or 'quit'."));
    assert_eq!(*report.ending(), Ending::Quit);
}

#[test]
fn test_replay_starts_fresh_round_with_same_range() {
    let (report, out) = guess(7, 7, "7\nmaybe\ny\n7\nn\n");

    assert!(out.contains(YES_NO_RETRY));
    assert_eq!(out.matches("I'm thinking of a number between 7 and 7.").count(), 2);
    assert_eq!(out.matches("It took you 1 attempt(s).").count(), 2);
    assert_eq!(*report.rounds(), 2);
    assert_eq!(*report.finished(), 2);
}

#[test]
fn test_custom_range_then_end_of_input() {
    let command = Command::Guess {
        min: None,
        max: None,
        seed: Some(1),
    };
    let mut console = Console::new(Cursor::new("y\n5\n5\n5\n"), Vec::new());
    let report = play(&command, &mut console).unwrap();
    assert_eq!(report.game(), "Number Guessing");
    let out = String::from_utf8(console.into_output()).unwrap();

    assert!(out.contains(CUSTOM_RANGE_PROMPT));
    assert_eq!(
        out.matches("Maximum must be greater than minimum (5). Try again: ").count(),
        2
    );
    assert_eq!(*report.rounds(), 0);
    assert_eq!(*report.ending(), Ending::EndOfInput);
}

#[test]
fn test_empty_input_ends_cleanly() {
    let command = Command::Guess {
        min: None,
        max: None,
        seed: None,
    };
    let mut console = Console::new(Cursor::new(""), Vec::new());
    let report = play(&command, &mut console).unwrap();
    assert_eq!(report.game(), "Number Guessing");
    assert_eq!(*report.ending(), Ending::EndOfInput);
}

#[test]
fn test_inverted_cli_range_rejected() {
    assert!(guess_settings(Some(10), Some(1), None).is_err());
    assert!(guess_settings(Some(1), None, None).is_err());
    assert!(guess_settings(Some(4), Some(4), Some(0)).is_ok());
}
