//! User-facing text for the guessing game.

use super::{GuessRange, GuessSession, Hint, Tier, Verdict, tier};
use parlor_console::Rejection;

/// Title shown before anything else.
pub const TITLE: &str = "🎲 Number Guessing Game 🎲";

/// Optional custom range question.
pub const CUSTOM_RANGE_PROMPT: &str = "Would you like to set a custom range? (y/n, default is 1-100): ";

/// Prompt for the custom lower bound.
pub const MIN_PROMPT: &str = "Enter minimum number: ";

/// Prompt for the custom upper bound.
pub const MAX_PROMPT: &str = "Enter maximum number: ";

/// Re-prompt after a bound that is not a number.
pub const INVALID_BOUND: &str = "Invalid input! Please enter a valid number: ";

/// Replay question.
pub const REPLAY_PROMPT: &str = "\nWould you like to play again? (y/n): ";

/// Farewell lines.
pub const FAREWELL: &str = "\nThanks for playing the Number Guessing Game!\nGoodbye! 👋";

/// Re-prompt after an upper bound that does not exceed the lower bound.
pub fn max_too_small(min: i32) -> String {
    format!("Maximum must be greater than minimum ({}). Try again: ", min)
}

/// Confirms a custom range.
pub fn range_confirmation(range: GuessRange) -> String {
    format!("Great! Playing with range {} to {}", range.min(), range.max())
}

/// Banner shown at the start of every round.
pub fn round_banner(range: GuessRange) -> String {
    format!(
        "\n=================================\n  Welcome to Number Guessing Game!\n=================================\n\
         I'm thinking of a number between {} and {}.\n\
         Can you guess what it is?\n\
         Enter your guess (or 'quit' to exit): ",
        range.min(),
        range.max()
    )
}

/// Prompt for the next guess.
pub fn attempt_prompt(session: &GuessSession) -> String {
    format!("\nAttempt #{}: ", session.attempts() + 1)
}

/// Message for a guess token that failed to parse.
pub fn rejection_message(reason: &Rejection, range: GuessRange) -> String {
    match reason {
        Rejection::Overflow(_) => format!(
            "Number too large! Please enter a number between {} and {}.",
            range.min(),
            range.max()
        ),
        Rejection::OutOfRange { .. } => format!(
            "Please enter a number between {} and {}.",
            range.min(),
            range.max()
        ),
        Rejection::Unreadable => "Invalid input! Please enter a number or 'quit'.".to_string(),
        Rejection::NotANumber(_) | Rejection::UnknownOperator(_) => {
            "Invalid input! Please enter a valid number or 'quit'.".to_string()
        }
    }
}

fn tier_message(tier: Tier) -> &'static str {
    match tier {
        Tier::FirstTry => "Amazing! You got it on the first try!",
        Tier::Excellent => "Excellent! Very few attempts needed!",
        Tier::Good => "Good job! That's a reasonable number of attempts.",
        Tier::ManyAttempts => "You got there in the end! Practice makes perfect.",
    }
}

fn hint_message(hint: Hint) -> &'static str {
    match hint {
        Hint::Close => "You're getting close!",
        Hint::Warm => "Getting warmer...",
    }
}

/// Feedback for an evaluated guess.
pub fn feedback(session: &GuessSession, verdict: Verdict, hint: Option<Hint>) -> String {
    let mut lines = match verdict {
        Verdict::Equal => {
            return format!(
                "\n🎉 Congratulations! You guessed it!\nThe number was {}\nIt took you {} attempt(s).\n{}",
                session.target(),
                session.attempts(),
                tier_message(tier(session.attempts()))
            );
        }
        Verdict::Lower => vec!["Too low! Try a higher number."],
        Verdict::Higher => vec!["Too high! Try a lower number."],
    };
    lines.extend(hint.map(hint_message));
    lines.join("\n")
}
