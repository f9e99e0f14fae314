//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player};
use super::win::check_win;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().all(|s| s.mark().is_some())
}

/// A draw is a full board on which neither player has a line.
#[instrument]
pub fn check_draw(board: &Board) -> bool {
    is_full(board) && !check_win(board, Player::X) && !check_win(board, Player::O)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Position, Square};
    use super::*;

    fn fill(marks: [Player; 9]) -> Board {
        let mut board = Board::new();
        for (number, player) in (1..=9).zip(marks) {
            board.set(Position::from_number(number).unwrap(), Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert!(check_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!check_draw(&board));
    }
}
