//! Move application.

use super::super::{Board, MoveError, Player, Position, Square};
use tracing::instrument;

/// Places `player`'s mark at `(row, col)` and returns the resulting board.
///
/// The input board is left untouched when the move is refused.
#[instrument]
pub fn apply_move(board: Board, player: Player, row: usize, col: usize) -> Result<Board, MoveError> {
    let pos = Position::from_cell(row, col).ok_or(MoveError::OffBoard { row, col })?;

    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }

    let mut next = board;
    next.set(pos, Square::Occupied(player));
    Ok(next)
}
