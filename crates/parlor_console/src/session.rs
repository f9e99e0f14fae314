//! The validated interactive session loop.
//!
//! A session walks the state machine
//! `Start -> Playing -> {round over | Quit | EndOfInput} -> (replay? -> Playing | Terminate)`.
//! Games plug in as [`Game`] strategies; the loop owns round state and
//! decides every transition.

use crate::console::Console;
use crate::error::ConsoleError;
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Result of the one-time setup phase before the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    /// Setup finished; rounds can begin.
    Ready,
    /// The stream closed during setup.
    EndOfInput,
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RoundEnd {
    /// The round was won.
    #[display("won")]
    Won,
    /// The round ended with no winner.
    #[display("drawn")]
    Drawn,
    /// The round ran to completion (no winner concept).
    #[display("completed")]
    Completed,
}

/// What the loop should do after one step of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Stay in the current round and step again.
    Continue,
    /// The round is over; offer a replay.
    RoundOver(RoundEnd),
    /// The user asked to leave.
    Quit,
    /// The input stream closed.
    EndOfInput,
}

/// Why a session terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Ending {
    /// The user declined to play again.
    #[display("declined replay")]
    Declined,
    /// The user asked to quit mid-round.
    #[display("quit")]
    Quit,
    /// The input stream closed.
    #[display("end of input")]
    EndOfInput,
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct SessionReport {
    /// Game title.
    #[getter(skip)]
    game: &'static str,
    /// Rounds started, including an unfinished last round.
    rounds: u32,
    /// Rounds that reached a result.
    finished: u32,
    /// Why the session terminated.
    ending: Ending,
}

impl SessionReport {
    /// Returns the title of the game that was played.
    pub fn game(&self) -> &'static str {
        self.game
    }
}

/// A game playable by the session loop.
///
/// Implementors hold session configuration; per-round state lives in
/// [`Game::Round`] and is owned by the loop.
pub trait Game {
    /// Mutable state of one round.
    type Round;

    /// Short game title used in logs.
    fn title(&self) -> &'static str;

    /// Text shown once when the session starts.
    fn welcome(&self) -> String;

    /// One-time interactive setup before the first round.
    fn setup<R: BufRead, W: Write>(
        &mut self,
        _console: &mut Console<R, W>,
    ) -> Result<Setup, ConsoleError> {
        Ok(Setup::Ready)
    }

    /// Creates fresh round state.
    fn new_round(&mut self) -> Self::Round;

    /// Text shown at the start of every round.
    fn round_banner(&self, _round: &Self::Round) -> Option<String> {
        None
    }

    /// Runs one prompt, parse, evaluate and render cycle.
    fn step<R: BufRead, W: Write>(
        &mut self,
        round: &mut Self::Round,
        console: &mut Console<R, W>,
    ) -> Result<Step, ConsoleError>;

    /// Question asked after a finished round.
    fn replay_prompt(&self) -> &'static str;

    /// Text shown when the session terminates.
    fn farewell(&self) -> String;
}

/// Runs a complete session of `game` on `console`.
#[instrument(skip_all, fields(game = game.title()))]
pub fn run<G, R, W>(game: &mut G, console: &mut Console<R, W>) -> Result<SessionReport, ConsoleError>
where
    G: Game,
    R: BufRead,
    W: Write,
{
    info!("Session started");
    console.say(&game.welcome())?;

    let mut rounds = 0;
    let mut finished = 0;

    let ending = 'session: {
        if game.setup(console)? == Setup::EndOfInput {
            break 'session Ending::EndOfInput;
        }

        loop {
            let mut round = game.new_round();
            rounds += 1;
            debug!(rounds, "Round started");

            if let Some(banner) = game.round_banner(&round) {
                console.say(&banner)?;
            }

            loop {
                match game.step(&mut round, console)? {
                    Step::Continue => {}
                    Step::RoundOver(end) => {
                        finished += 1;
                        info!(%end, rounds, "Round finished");
                        break;
                    }
                    Step::Quit => break 'session Ending::Quit,
                    Step::EndOfInput => break 'session Ending::EndOfInput,
                }
            }

            match console.ask_yes_no(game.replay_prompt())? {
                Some(true) => debug!("Replay accepted"),
                Some(false) => break 'session Ending::Declined,
                None => break 'session Ending::EndOfInput,
            }
        }
    };

    console.say(&game.farewell())?;
    info!(%ending, rounds, finished, "Session ended");

    Ok(SessionReport::new(game.title(), rounds, finished, ending))
}
