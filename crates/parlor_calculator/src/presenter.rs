//! User-facing text for the calculator.

use super::CalculatorRound;

/// Session welcome banner.
pub const WELCOME: &str = "========================================
        Welcome to Calculator!
========================================
This calculator supports:
  + Addition
  - Subtraction
  * Multiplication
  / Division
----------------------------------------";

/// Shown at the start of every calculation.
pub const ROUND_BANNER: &str = "\n--- New Calculation ---";

/// Prompt for the left operand.
pub const FIRST_NUMBER_PROMPT: &str = "Enter the first number: ";

/// Prompt for the operator.
pub const OPERATOR_PROMPT: &str = "Choose an operation (+, -, *, /): ";

/// Prompt for the right operand.
pub const SECOND_NUMBER_PROMPT: &str = "Enter the second number: ";

/// Shown when an operand token is not a usable number.
pub const INVALID_NUMBER: &str = "Invalid input! Please enter a valid number.";

/// Shown when the operator token is not one of the four symbols.
pub const INVALID_OPERATOR: &str = "Invalid operation! Please choose +, -, *, or /";

/// Shown instead of a result when dividing by zero.
pub const DIVIDE_BY_ZERO: &str = "Error: Division by zero is not allowed!";

/// Replay question.
pub const REPLAY_PROMPT: &str = "\nDo you want to perform another calculation? (y/n): ";

/// Farewell line.
pub const FAREWELL: &str = "\nThank you for using the calculator! Goodbye!";

/// Formats `a op b = result` with two decimal places.
pub fn result_line(round: &CalculatorRound, result: f64) -> String {
    format!(
        "\nResult: {:.2} {} {:.2} = {:.2}",
        round.operand1, round.operator, round.operand2, result
    )
}
