//! Arithmetic evaluation.

use super::Operator;
use derive_new::new;
use parlor_console::ErrorKind;
use tracing::instrument;

/// Arithmetic that produced no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ArithmeticError {
    /// The divisor was zero.
    #[display("Division by zero")]
    DivideByZero,
}

impl ArithmeticError {
    /// Returns the taxonomy category of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::RecoverableArithmetic
    }
}

impl std::error::Error for ArithmeticError {}

/// Applies `op` to `a` and `b`.
///
/// Only division can fail, and only when `b` is zero.
#[instrument]
pub fn evaluate(a: f64, b: f64, op: Operator) -> Result<f64, ArithmeticError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide if b == 0.0 => Err(ArithmeticError::DivideByZero),
        Operator::Divide => Ok(a / b),
    }
}

/// The three inputs of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct CalculatorRound {
    /// Left-hand operand.
    pub operand1: f64,
    /// Operation to apply.
    pub operator: Operator,
    /// Right-hand operand.
    pub operand2: f64,
}

impl CalculatorRound {
    /// Evaluates the calculation.
    pub fn evaluate(&self) -> Result<f64, ArithmeticError> {
        evaluate(self.operand1, self.operand2, self.operator)
    }
}
