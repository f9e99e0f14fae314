//! Console number-guessing game.
//!
//! The player guesses a secret number drawn from an inclusive range and
//! gets higher/lower feedback with a hint for near misses. A finished round
//! ends with a performance tier based on the number of attempts.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod presenter;
mod range;
mod rules;
mod session;
mod settings;

pub use range::{GuessRange, RangeError};
pub use rules::{GuessSession, Hint, Tier, Verdict, evaluate, hint, tier};
pub use session::{GuessGame, QUIT_WORDS, parse_guess};
pub use settings::GuessSettings;
