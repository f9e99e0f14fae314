//! Parlor - validated interactive console games
//!
//! Three small games share one session loop that prompts, validates,
//! re-prompts on bad input, and offers a replay after each round.
//!
//! # Architecture
//!
//! - **Console**: token input, shared parsers and the session loop (`parlor_console`)
//! - **Guess**: number guessing with hints and performance tiers (`parlor_guess`)
//! - **Calculator**: four-function arithmetic (`parlor_calculator`)
//! - **Tic-tac-toe**: two players on a 3x3 board (`parlor_tictactoe`)
//!
//! # Example
//!
//! ```
//! use parlor::{Command, play};
//! use parlor_console::{Console, Ending};
//! use std::io::Cursor;
//!
//! let mut console = Console::new(Cursor::new("3\n+\n4\nn\n"), Vec::new());
//! let report = play(&Command::Calc, &mut console)?;
//! assert_eq!(*report.ending(), Ending::Declined);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;

pub use cli::{Cli, Command};

pub use parlor_calculator as calculator;
pub use parlor_console as console;
pub use parlor_guess as guess;
pub use parlor_tictactoe as tictactoe;

use parlor_calculator::CalculatorGame;
use parlor_console::{Console, SessionReport, run};
use parlor_guess::{GuessGame, GuessRange, GuessSettings};
use parlor_tictactoe::TicTacToeGame;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Maps the `guess` arguments onto session settings.
#[instrument]
pub fn guess_settings(
    min: Option<i32>,
    max: Option<i32>,
    seed: Option<u64>,
) -> anyhow::Result<GuessSettings> {
    let range = match (min, max) {
        (Some(min), Some(max)) => match GuessRange::new(min, max) {
            Ok(range) => Some(range),
            Err(err) => {
                warn!(%err, kind = %err.kind(), "Range rejected");
                return Err(err.into());
            }
        },
        (None, None) => None,
        _ => anyhow::bail!("--min and --max must be given together"),
    };
    Ok(GuessSettings::new(range, seed))
}

/// Runs the session selected by `command` on `console`.
#[instrument(skip(console))]
pub fn play<R: BufRead, W: Write>(
    command: &Command,
    console: &mut Console<R, W>,
) -> anyhow::Result<SessionReport> {
    let report = match *command {
        Command::Guess { min, max, seed } => {
            let mut game = GuessGame::new(guess_settings(min, max, seed)?);
            run(&mut game, console)?
        }
        Command::Calc => run(&mut CalculatorGame::new(), console)?,
        Command::Tictactoe => run(&mut TicTacToeGame::new(), console)?,
    };
    info!(
        game = report.game(),
        rounds = report.rounds(),
        finished = report.finished(),
        ending = %report.ending(),
        "Session complete"
    );
    Ok(report)
}
