//! Parlor - console games CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use parlor::{Cli, play};
use parlor_console::Console;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Stdout carries the game transcript, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut console = Console::stdio();
    play(&cli.command, &mut console)?;
    Ok(())
}
