//! Interactive guessing session.

use super::presenter::{
    CUSTOM_RANGE_PROMPT, FAREWELL, INVALID_BOUND, MAX_PROMPT, MIN_PROMPT, REPLAY_PROMPT, TITLE,
    attempt_prompt, feedback, max_too_small, range_confirmation, rejection_message, round_banner,
};
use super::{GuessRange, GuessSession, GuessSettings, Verdict, hint};
use parlor_console::{
    Console, ConsoleError, Game, RoundEnd, Setup, Step, ValidationOutcome, parse_int_in_range,
    parse_integer,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Tokens that end the session from the guess prompt. Matched case-sensitively.
pub const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// Parses a guess, recognizing the quit words first.
#[instrument]
pub fn parse_guess(token: &str, range: GuessRange) -> ValidationOutcome<i32> {
    if QUIT_WORDS.contains(&token) {
        return ValidationOutcome::QuitRequested;
    }
    parse_int_in_range(token, range.min(), range.max())
}

/// Number guessing against a randomly drawn target.
#[derive(Debug)]
pub struct GuessGame {
    range: GuessRange,
    offer_custom_range: bool,
    rng: StdRng,
}

impl GuessGame {
    /// Creates the game from session settings.
    #[instrument]
    pub fn new(settings: GuessSettings) -> Self {
        let rng = match settings.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            range: settings.range().unwrap_or_default(),
            offer_custom_range: settings.range().is_none(),
            rng,
        }
    }

    /// Returns the range used for new rounds.
    pub fn range(&self) -> GuessRange {
        self.range
    }

    /// Reads integer bounds until `accept` takes one, re-prompting with its message.
    ///
    /// Returns `None` if the stream closes first.
    fn read_bound<T, R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        prompt: &str,
        mut accept: impl FnMut(i32) -> Result<T, String>,
    ) -> Result<Option<T>, ConsoleError> {
        let mut prompt = prompt.to_string();
        loop {
            match console.read_with(&prompt, |t| ValidationOutcome::<i32>::from(parse_integer(t)))? {
                ValidationOutcome::Accepted(value) => match accept(value) {
                    Ok(value) => return Ok(Some(value)),
                    Err(retry) => prompt = retry,
                },
                ValidationOutcome::Rejected(_) => prompt = INVALID_BOUND.to_string(),
                ValidationOutcome::QuitRequested | ValidationOutcome::EndOfInput => return Ok(None),
            }
        }
    }
}

impl Game for GuessGame {
    type Round = GuessSession;

    fn title(&self) -> &'static str {
        "Number Guessing"
    }

    fn welcome(&self) -> String {
        TITLE.to_string()
    }

    #[instrument(skip_all)]
    fn setup<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Setup, ConsoleError> {
        if !self.offer_custom_range {
            return Ok(Setup::Ready);
        }

        match console.ask_yes_no(CUSTOM_RANGE_PROMPT)? {
            None => return Ok(Setup::EndOfInput),
            Some(false) => return Ok(Setup::Ready),
            Some(true) => {}
        }

        let Some(min) = Self::read_bound(console, MIN_PROMPT, Ok)? else {
            return Ok(Setup::EndOfInput);
        };
        let Some(range) = Self::read_bound(console, MAX_PROMPT, |max| match GuessRange::new(min, max) {
            Ok(range) if max > min => Ok(range),
            _ => Err(max_too_small(min)),
        })?
        else {
            return Ok(Setup::EndOfInput);
        };

        self.range = range;
        info!(min = range.min(), max = range.max(), "Custom range set");
        console.say(&range_confirmation(range))?;
        Ok(Setup::Ready)
    }

    fn new_round(&mut self) -> GuessSession {
        GuessSession::new(self.range, &mut self.rng)
    }

    fn round_banner(&self, round: &GuessSession) -> Option<String> {
        Some(round_banner(round.range()))
    }

    #[instrument(skip_all, fields(attempts = round.attempts()))]
    fn step<R: BufRead, W: Write>(
        &mut self,
        round: &mut GuessSession,
        console: &mut Console<R, W>,
    ) -> Result<Step, ConsoleError> {
        let range = round.range();
        match console.read_with(&attempt_prompt(round), |t| parse_guess(t, range))? {
            ValidationOutcome::Accepted(guess) => {
                let verdict = round.guess(guess);
                console.say(&feedback(round, verdict, hint(guess, round.target())))?;
                if verdict == Verdict::Equal {
                    info!(attempts = round.attempts(), "Number found");
                    return Ok(Step::RoundOver(RoundEnd::Won));
                }
                Ok(Step::Continue)
            }
            ValidationOutcome::Rejected(reason) => {
                console.say(&rejection_message(&reason, range))?;
                Ok(Step::Continue)
            }
            ValidationOutcome::QuitRequested => {
                debug!("Quit requested");
                Ok(Step::Quit)
            }
            ValidationOutcome::EndOfInput => Ok(Step::EndOfInput),
        }
    }

    fn replay_prompt(&self) -> &'static str {
        REPLAY_PROMPT
    }

    fn farewell(&self) -> String {
        FAREWELL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn setup_with(input: &str) -> (GuessGame, Setup, String) {
        let mut game = GuessGame::new(GuessSettings::new(None, Some(11)));
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let setup = game.setup(&mut console).unwrap();
        (game, setup, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_quit_words_case_sensitive() {
        for word in QUIT_WORDS {
            assert_eq!(
                parse_guess(word, GuessRange::DEFAULT),
                ValidationOutcome::QuitRequested
            );
        }
        assert!(matches!(
            parse_guess("QUIT", GuessRange::DEFAULT),
            ValidationOutcome::Rejected(_)
        ));
    }

    #[test]
    fn test_parse_guess_range() {
        assert_eq!(parse_guess("100", GuessRange::DEFAULT), ValidationOutcome::Accepted(100));
        assert!(matches!(
            parse_guess("0", GuessRange::DEFAULT),
            ValidationOutcome::Rejected(_)
        ));
    }

    #[test]
    fn test_default_range_kept_when_declined() {
        let (game, setup, _) = setup_with("n\n");
        assert_eq!(setup, Setup::Ready);
        assert_eq!(game.range(), GuessRange::DEFAULT);
    }

    #[test]
    fn test_custom_range_requires_max_above_min() {
        let (game, setup, out) = setup_with("y\nten\n10\n5\n10\n20\n");
        assert_eq!(setup, Setup::Ready);
        assert_eq!(game.range(), GuessRange::new(10, 20).unwrap());
        assert!(out.contains(INVALID_BOUND));
        assert!(out.contains("Maximum must be greater than minimum (10). Try again: "));
        assert!(out.ends_with("Great! Playing with range 10 to 20\n"));
    }

    #[test]
    fn test_end_of_input_during_setup() {
        let (_, setup, _) = setup_with("yes\n3\n");
        assert_eq!(setup, Setup::EndOfInput);
    }

    #[test]
    fn test_preset_range_skips_prompt() {
        let range = GuessRange::new(1, 1).unwrap();
        let mut game = GuessGame::new(GuessSettings::new(Some(range), None));
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert_eq!(game.setup(&mut console).unwrap(), Setup::Ready);
        assert!(console.output().is_empty());
        assert_eq!(game.new_round().target(), 1);
    }
}
