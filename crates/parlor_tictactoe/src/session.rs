//! Interactive two-player session.

use super::presenter::{
    DRAW, FAREWELL, REPLAY_PROMPT, WELCOME, move_error_message, move_prompt, rejection_message,
    render_board, win_message,
};
use super::types::GameStatus;
use super::{Match, Position};
use parlor_console::{
    Console, ConsoleError, Game, Rejection, RoundEnd, Step, ValidationOutcome, parse_int_in_range,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Parses a player-facing position number (1-9).
#[instrument]
pub fn parse_position(token: &str) -> ValidationOutcome<Position> {
    parse_int_in_range(token, 1, 9).and_then(|number| {
        Position::from_number(number).ok_or(Rejection::OutOfRange {
            value: number,
            min: 1,
            max: 9,
        })
    })
}

/// Tic-tac-toe played by two people sharing one console.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToeGame;

impl TicTacToeGame {
    /// Creates the game.
    pub fn new() -> Self {
        Self
    }
}

impl Game for TicTacToeGame {
    type Round = Match;

    fn title(&self) -> &'static str {
        "Tic-Tac-Toe"
    }

    fn welcome(&self) -> String {
        WELCOME.to_string()
    }

    fn new_round(&mut self) -> Match {
        Match::new()
    }

    #[instrument(skip_all, fields(player = %round.current_player()))]
    fn step<R: BufRead, W: Write>(
        &mut self,
        round: &mut Match,
        console: &mut Console<R, W>,
    ) -> Result<Step, ConsoleError> {
        console.say(&render_board(round.board()))?;

        let prompt = move_prompt(round.current_player());
        let position = match console.read_with(&prompt, parse_position)? {
            ValidationOutcome::Accepted(pos) => pos,
            ValidationOutcome::Rejected(reason) => {
                console.say(rejection_message(&reason))?;
                return Ok(Step::Continue);
            }
            ValidationOutcome::QuitRequested => return Ok(Step::Quit),
            ValidationOutcome::EndOfInput => return Ok(Step::EndOfInput),
        };

        match round.play(position) {
            Ok(GameStatus::InProgress) => Ok(Step::Continue),
            Ok(GameStatus::Won(winner)) => {
                info!(%winner, moves = round.history().len(), "Match won");
                console.say(&render_board(round.board()))?;
                console.say(&win_message(winner))?;
                Ok(Step::RoundOver(RoundEnd::Won))
            }
            Ok(GameStatus::Draw) => {
                info!(moves = round.history().len(), "Match drawn");
                console.say(&render_board(round.board()))?;
                console.say(DRAW)?;
                Ok(Step::RoundOver(RoundEnd::Drawn))
            }
            Err(err) => {
                debug!(%err, kind = %err.kind(), "Move refused");
                console.say(move_error_message(&err))?;
                Ok(Step::Continue)
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
