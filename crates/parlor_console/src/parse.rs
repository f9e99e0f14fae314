//! Token parsers shared by every game.
//!
//! Parsers never fail: they report a [`ValidationOutcome`] that the session
//! loop inspects before touching any round state.

use crate::error::Rejection;
use std::num::IntErrorKind;
use tracing::instrument;

/// Result of validating one token.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome<T> {
    /// The token produced a usable value.
    Accepted(T),
    /// The token was refused; the same prompt should be reissued.
    Rejected(Rejection),
    /// The user asked to leave the session.
    QuitRequested,
    /// The input stream closed.
    EndOfInput,
}

impl<T> ValidationOutcome<T> {
    /// Validates the accepted value further, rejecting it on `Err`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, Rejection>) -> ValidationOutcome<U> {
        match self {
            ValidationOutcome::Accepted(value) => f(value).into(),
            ValidationOutcome::Rejected(reason) => ValidationOutcome::Rejected(reason),
            ValidationOutcome::QuitRequested => ValidationOutcome::QuitRequested,
            ValidationOutcome::EndOfInput => ValidationOutcome::EndOfInput,
        }
    }
}

impl<T> From<Result<T, Rejection>> for ValidationOutcome<T> {
    fn from(result: Result<T, Rejection>) -> Self {
        match result {
            Ok(value) => ValidationOutcome::Accepted(value),
            Err(reason) => ValidationOutcome::Rejected(reason),
        }
    }
}

/// Parses a whole token as an `i32`.
///
/// Integer literals that do not fit are reported as
/// [`Rejection::Overflow`], anything else as [`Rejection::NotANumber`].
#[instrument]
pub fn parse_integer(token: &str) -> Result<i32, Rejection> {
    token.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Rejection::Overflow(token.to_string())
        }
        _ => Rejection::NotANumber(token.to_string()),
    })
}

/// Parses an integer and checks it against `min..=max`.
#[instrument]
pub fn parse_int_in_range(token: &str, min: i32, max: i32) -> ValidationOutcome<i32> {
    parse_integer(token)
        .and_then(|value| {
            if (min..=max).contains(&value) {
                Ok(value)
            } else {
                Err(Rejection::OutOfRange { value, min, max })
            }
        })
        .into()
}

/// Parses a finite real number.
///
/// `nan` and `inf` spellings are not numbers; literals beyond the `f64`
/// range overflow.
#[instrument]
pub fn parse_real(token: &str) -> ValidationOutcome<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => ValidationOutcome::Accepted(value),
        Ok(value) if value.is_infinite() && token.bytes().any(|b| b.is_ascii_digit()) => {
            ValidationOutcome::Rejected(Rejection::Overflow(token.to_string()))
        }
        _ => ValidationOutcome::Rejected(Rejection::NotANumber(token.to_string())),
    }
}

/// Interprets a yes/no answer, ignoring case.
///
/// Returns `None` for anything other than `y`, `yes`, `n` or `no`.
#[instrument]
pub fn parse_yes_no(token: &str) -> Option<bool> {
    match token.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
