//! Arithmetic operators and their parser.

use derive_more::Display;
use parlor_console::{Rejection, ValidationOutcome};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the four supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Operator {
    /// Addition.
    #[display("+")]
    Add,
    /// Subtraction.
    #[display("-")]
    Subtract,
    /// Multiplication.
    #[display("*")]
    Multiply,
    /// Division.
    #[display("/")]
    Divide,
}

impl Operator {
    /// The symbol typed by the user.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Looks up an operator by its exact symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::iter().find(|op| op.symbol() == symbol)
    }
}

/// Parses an operator token; only the four bare symbols are accepted.
#[instrument]
pub fn parse_operator(token: &str) -> ValidationOutcome<Operator> {
    Operator::from_symbol(token)
        .ok_or_else(|| Rejection::UnknownOperator(token.to_string()))
        .into()
}
