//! Board positions and their 1-9 keypad numbering.

use derive_more::Display;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Players name positions 1-9, left to right and top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 1)
    #[display("Top-left")]
    TopLeft,
    /// Top-center (position 2)
    #[display("Top-center")]
    TopCenter,
    /// Top-right (position 3)
    #[display("Top-right")]
    TopRight,
    /// Middle-left (position 4)
    #[display("Middle-left")]
    MiddleLeft,
    /// Center (position 5)
    #[display("Center")]
    Center,
    /// Middle-right (position 6)
    #[display("Middle-right")]
    MiddleRight,
    /// Bottom-left (position 7)
    #[display("Bottom-left")]
    BottomLeft,
    /// Bottom-center (position 8)
    #[display("Bottom-center")]
    BottomCenter,
    /// Bottom-right (position 9)
    #[display("Bottom-right")]
    BottomRight,
}

impl Position {
    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Creates position from the player-facing number (1-9).
    #[instrument]
    pub fn from_number(number: i32) -> Option<Self> {
        match number {
            1..=9 => Self::from_index((number - 1) as usize),
            _ => None,
        }
    }

    /// Returns the player-facing number (1-9).
    pub fn number(self) -> u8 {
        self.to_index() as u8 + 1
    }

    /// Row of this position, 0 at the top.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position, 0 at the left.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from zero-based grid coordinates.
    pub fn from_cell(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}
