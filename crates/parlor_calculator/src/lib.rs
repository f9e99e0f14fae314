//! Four-function console calculator.
//!
//! Each round reads a number, an operator and a second number, then prints
//! the result to two decimal places. Division by zero is reported and the
//! session carries on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod operator;
pub mod presenter;
mod rules;
mod session;

pub use operator::{Operator, parse_operator};
pub use rules::{ArithmeticError, CalculatorRound, evaluate};
pub use session::{CalculatorGame, Stage};
