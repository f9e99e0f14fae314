//! Marks, cells and the 3x3 grid.

use super::position::Position;
use derive_more::Display;

/// One of the two players sharing the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Player {
    /// Opens every match.
    #[display("X")]
    X,
    /// Replies to X.
    #[display("O")]
    O,
}

impl Player {
    /// The player who moves next after `self`.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a player's mark.
    Occupied(Player),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Character drawn for this cell; a blank for an empty one.
    pub fn symbol(self) -> char {
        self.mark().map_or(' ', |player| match player {
            Player::X => 'X',
            Player::O => 'O',
        })
    }
}

/// The 3x3 grid, indexed by row then column.
///
/// `Board` is a small value; rules return an updated copy instead of
/// mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    grid: [[Square; 3]; 3],
}

impl Board {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the cell at `pos`.
    pub fn get(&self, pos: Position) -> Square {
        self.grid[pos.row()][pos.col()]
    }

    /// Overwrites the cell at `pos`.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.grid[pos.row()][pos.col()] = square;
    }

    /// True when no mark has been placed at `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).mark().is_none()
    }

    /// Iterates over all cells, row by row.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.grid.iter().flatten().copied()
    }
}

/// Where a match stands after the latest move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// Three in a line for this player.
    Won(Player),
    /// Full grid, no line.
    Draw,
}
