//! Error taxonomy for console sessions.
//!
//! User mistakes are [`Rejection`]s and are always recovered by the session
//! loop. [`ConsoleError`] is reserved for failures of the console stream
//! itself.

use derive_more::{Display, Error};
use tracing::instrument;

/// Category of every failure a session can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// Non-numeric text where a number was expected, or an unknown choice.
    #[display("malformed input")]
    MalformedInput,
    /// A value outside the declared bounds, including numeric overflow.
    #[display("out of range")]
    OutOfRange,
    /// A board move onto an occupied or nonexistent cell.
    #[display("illegal move")]
    IllegalMove,
    /// Arithmetic that has no result, such as division by zero.
    #[display("recoverable arithmetic error")]
    RecoverableArithmetic,
    /// The input stream was closed.
    #[display("stream closed")]
    StreamClosed,
}

/// Why a token was not accepted by a parser.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The token is not a number at all.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),

    /// The token is a number too large for the target type.
    #[display("{:?} does not fit the numeric type", _0)]
    Overflow(String),

    /// The number parsed but lies outside `min..=max`.
    #[display("{value} is outside {min}..={max}")]
    OutOfRange {
        /// The parsed value.
        value: i32,
        /// Lowest accepted value.
        min: i32,
        /// Highest accepted value.
        max: i32,
    },

    /// The token is not one of the accepted operator symbols.
    #[display("{:?} is not a supported operator", _0)]
    UnknownOperator(String),

    /// The line could not be decoded as text.
    #[display("unreadable input")]
    Unreadable,
}

impl Rejection {
    /// Returns the taxonomy category of this rejection.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Rejection::NotANumber(_) | Rejection::UnknownOperator(_) | Rejection::Unreadable => {
                ErrorKind::MalformedInput
            }
            Rejection::Overflow(_) | Rejection::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}

impl std::error::Error for Rejection {}

/// Failure of the console stream with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
