//! Interactive calculator session.

use super::presenter::{
    DIVIDE_BY_ZERO, FAREWELL, FIRST_NUMBER_PROMPT, INVALID_NUMBER, INVALID_OPERATOR,
    OPERATOR_PROMPT, REPLAY_PROMPT, ROUND_BANNER, SECOND_NUMBER_PROMPT, WELCOME, result_line,
};
use super::{CalculatorRound, Operator, parse_operator};
use parlor_console::{
    Console, ConsoleError, Game, RoundEnd, Step, ValidationOutcome, parse_real,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Which input a calculation is waiting for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    /// Waiting for the left operand.
    FirstOperand,
    /// Waiting for the operator.
    Operator {
        /// Accepted left operand.
        operand1: f64,
    },
    /// Waiting for the right operand.
    SecondOperand {
        /// Accepted left operand.
        operand1: f64,
        /// Accepted operator.
        operator: Operator,
    },
}

/// Four-function calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorGame;

impl CalculatorGame {
    /// Creates the calculator.
    pub fn new() -> Self {
        Self
    }
}

/// Maps a validated read onto the next step, reporting rejections with `message`.
fn advance<T, R: BufRead, W: Write>(
    outcome: ValidationOutcome<T>,
    message: &str,
    console: &mut Console<R, W>,
    on_accept: impl FnOnce(T, &mut Console<R, W>) -> Result<Step, ConsoleError>,
) -> Result<Step, ConsoleError> {
    match outcome {
        ValidationOutcome::Accepted(value) => on_accept(value, console),
        ValidationOutcome::Rejected(_) => {
            console.say(message)?;
            Ok(Step::Continue)
        }
        ValidationOutcome::QuitRequested => Ok(Step::Quit),
        ValidationOutcome::EndOfInput => Ok(Step::EndOfInput),
    }
}

impl Game for CalculatorGame {
    type Round = Stage;

    fn title(&self) -> &'static str {
        "Calculator"
    }

    fn welcome(&self) -> String {
        WELCOME.to_string()
    }

    fn new_round(&mut self) -> Stage {
        Stage::FirstOperand
    }

    fn round_banner(&self, _round: &Stage) -> Option<String> {
        Some(ROUND_BANNER.to_string())
    }

    #[instrument(skip_all, fields(stage = ?round))]
    fn step<R: BufRead, W: Write>(
        &mut self,
        round: &mut Stage,
        console: &mut Console<R, W>,
    ) -> Result<Step, ConsoleError> {
        match *round {
            Stage::FirstOperand => {
                let outcome = console.read_with(FIRST_NUMBER_PROMPT, parse_real)?;
                advance(outcome, INVALID_NUMBER, console, |operand1, _| {
                    *round = Stage::Operator { operand1 };
                    Ok(Step::Continue)
                })
            }
            Stage::Operator { operand1 } => {
                let outcome = console.read_with(OPERATOR_PROMPT, parse_operator)?;
                advance(outcome, INVALID_OPERATOR, console, |operator, _| {
                    *round = Stage::SecondOperand { operand1, operator };
                    Ok(Step::Continue)
                })
            }
            Stage::SecondOperand { operand1, operator } => {
                let outcome = console.read_with(SECOND_NUMBER_PROMPT, parse_real)?;
                advance(outcome, INVALID_NUMBER, console, |operand2, console| {
                    let calculation = CalculatorRound::new(operand1, operator, operand2);
                    match calculation.evaluate() {
                        Ok(result) => {
                            info!(?calculation, result, "Calculated");
                            console.say(&result_line(&calculation, result))?;
                        }
                        Err(err) => {
                            debug!(%err, kind = %err.kind(), "Calculation refused");
                            console.say(DIVIDE_BY_ZERO)?;
                        }
                    }
                    Ok(Step::RoundOver(RoundEnd::Completed))
                })
            }
        }
    }

    fn replay_prompt(&self) -> &'static str {
        REPLAY_PROMPT
    }

    fn farewell(&self) -> String {
        FAREWELL.to_string()
    }
}
