//! Validated interactive sessions over console streams.
//!
//! # Architecture
//!
//! - **Input**: [`TokenReader`] splits the input stream into tokens
//! - **Parsing**: shared token parsers returning [`ValidationOutcome`]
//! - **Console**: [`Console`] pairs prompts with validated reads
//! - **Session**: [`run`] drives any [`Game`] through rounds and replays

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod error;
mod input;
mod parse;
mod session;

pub use console::{Console, YES_NO_RETRY};
pub use error::{ConsoleError, ErrorKind, Rejection};
pub use input::{RawInput, TokenReader};
pub use parse::{ValidationOutcome, parse_int_in_range, parse_integer, parse_real, parse_yes_no};
pub use session::{Ending, Game, RoundEnd, SessionReport, Setup, Step, run};
