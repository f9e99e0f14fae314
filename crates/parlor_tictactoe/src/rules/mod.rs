//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](super::Board) values. Rules are kept apart
//! from match bookkeeping so they can be checked in isolation.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{check_draw, is_full};
pub use moves::apply_move;
pub use win::{check_win, check_winner};
