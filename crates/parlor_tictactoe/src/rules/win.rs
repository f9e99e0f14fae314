//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight lines that win the game.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` holds a complete row, column or diagonal.
#[instrument]
pub fn check_win(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Returns the player holding a complete line, if any.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| check_win(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for &pos in positions {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(player, &line);
                assert!(check_win(&board, player), "{line:?}");
                assert!(!check_win(&board, player.opponent()), "{line:?}");
                assert_eq!(check_winner(&board), Some(player));
            }
        }
    }

    #[test]
    fn test_only_canonical_triples_win() {
        // Any three cells that are not one of the eight lines never win.
        let all: Vec<Position> = Position::iter().collect();
        for a in 0..9 {
            for b in a + 1..9 {
                for c in b + 1..9 {
                    let triple = [all[a], all[b], all[c]];
                    let is_line = LINES
                        .iter()
                        .any(|line| line.iter().all(|p| triple.contains(p)));
                    let board = board_with(Player::X, &triple);
                    assert_eq!(check_win(&board, Player::X), is_line, "{triple:?}");
                }
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }
}
