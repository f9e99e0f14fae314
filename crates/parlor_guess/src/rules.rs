//! Guess evaluation and feedback rules.

use super::GuessRange;
use rand::Rng;
use tracing::{debug, instrument};

/// How a guess compares with the secret number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The guess is below the target.
    Lower,
    /// The guess is above the target.
    Higher,
    /// The guess is the target.
    Equal,
}

/// Extra hint for a near miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// Within 5 of the target.
    Close,
    /// Between 6 and 10 away from the target.
    Warm,
}

/// Performance feedback once the number is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Found on the first attempt.
    FirstTry,
    /// Found in 2 or 3 attempts.
    Excellent,
    /// Found in 4 to 7 attempts.
    Good,
    /// Took 8 attempts or more.
    ManyAttempts,
}

/// Compares `guess` with `target`.
#[instrument]
pub fn evaluate(guess: i32, target: i32) -> Verdict {
    match guess.cmp(&target) {
        std::cmp::Ordering::Less => Verdict::Lower,
        std::cmp::Ordering::Greater => Verdict::Higher,
        std::cmp::Ordering::Equal => Verdict::Equal,
    }
}

/// Hint band for a miss, based on the distance to the target.
#[instrument]
pub fn hint(guess: i32, target: i32) -> Option<Hint> {
    match guess.abs_diff(target) {
        0 => None,
        1..=5 => Some(Hint::Close),
        6..=10 => Some(Hint::Warm),
        _ => None,
    }
}

/// Performance tier for a number found after `attempts` guesses.
#[instrument]
pub fn tier(attempts: u32) -> Tier {
    match attempts {
        0..=1 => Tier::FirstTry,
        2..=3 => Tier::Excellent,
        4..=7 => Tier::Good,
        _ => Tier::ManyAttempts,
    }
}

/// State of one round: the secret number and the guesses spent on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessSession {
    target: i32,
    attempts: u32,
    range: GuessRange,
}

impl GuessSession {
    /// Starts a round with a freshly drawn target.
    #[instrument(skip(rng))]
    pub fn new(range: GuessRange, rng: &mut impl Rng) -> Self {
        Self::with_target(range, range.draw(rng))
    }

    /// Starts a round with a known target.
    pub fn with_target(range: GuessRange, target: i32) -> Self {
        Self {
            target,
            attempts: 0,
            range,
        }
    }

    /// Returns the secret number.
    pub fn target(&self) -> i32 {
        self.target
    }

    /// Returns the number of accepted guesses so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns the range the target was drawn from.
    pub fn range(&self) -> GuessRange {
        self.range
    }

    /// Records an accepted guess and compares it with the target.
    #[instrument(skip(self), fields(attempt = self.attempts + 1))]
    pub fn guess(&mut self, guess: i32) -> Verdict {
        self.attempts += 1;
        let verdict = evaluate(guess, self.target);
        debug!(?verdict, "Guess evaluated");
        verdict
    }
}
