//! Moves and move errors.

use super::{Player, Position};
use parlor_console::ErrorKind;
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.number())
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The coordinates are outside the 3x3 grid.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OffBoard {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The match is already over.
    #[display("Game is already over")]
    GameOver,
}

impl MoveError {
    /// Returns the taxonomy category of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::IllegalMove
    }
}

impl std::error::Error for MoveError {}
