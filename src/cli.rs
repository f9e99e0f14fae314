//! Command-line interface for parlor.

use clap::{Parser, Subcommand};

/// Parlor - validated console games
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Number guessing, calculator and tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Guess a secret number with higher/lower feedback
    Guess {
        /// Lower bound of the range (skips the custom range prompt)
        #[arg(long, requires = "max", allow_negative_numbers = true)]
        min: Option<i32>,

        /// Upper bound of the range
        #[arg(long, requires = "min", allow_negative_numbers = true)]
        max: Option<i32>,

        /// Seed for reproducible secret numbers
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Four-function calculator
    Calc,

    /// Two-player tic-tac-toe
    Tictactoe,
}
