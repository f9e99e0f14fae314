//! Two-player tic-tac-toe on a shared console.
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: pure move, win and draw checks in [`rules`]
//! - **Match**: one round of play with turn alternation
//! - **Session**: [`TicTacToeGame`] plugs the match into the console loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod presenter;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use game::Match;
pub use position::Position;
pub use rules::{apply_move, check_draw, check_win, check_winner, is_full};
pub use session::{TicTacToeGame, parse_position};
pub use types::{Board, GameStatus, Player, Square};
