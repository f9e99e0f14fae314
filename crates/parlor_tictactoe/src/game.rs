//! Match state: one board played to a result.

use super::rules::{apply_move, check_draw, check_winner};
use super::types::{Board, GameStatus, Player};
use super::{Move, MoveError, Position};
use tracing::{debug, instrument};

/// One round of tic-tac-toe.
///
/// X always moves first and turns strictly alternate. Win is checked
/// before draw after every move since a full board may also be a win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Match {
    /// Creates a match on an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the match status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays the current player's mark at `position`.
    ///
    /// An accepted move always hands the turn to the opponent; a refused
    /// move leaves the match unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        self.board = apply_move(self.board, player, position.row(), position.col())?;
        self.history.push(Move::new(player, position));

        self.status = match check_winner(&self.board) {
            Some(winner) => GameStatus::Won(winner),
            None if check_draw(&self.board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        self.current_player = player.opponent();

        debug!(status = ?self.status, moves = self.history.len(), "Move applied");
        Ok(self.status)
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::check_win;

    fn play_numbers(game: &mut Match, numbers: &[i32]) -> GameStatus {
        let mut status = game.status();
        for &n in numbers {
            status = game.play(Position::from_number(n).unwrap()).unwrap();
        }
        status
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Match::new();
        assert_eq!(game.current_player(), Player::X);
        game.play(Position::Center).unwrap();
        assert_eq!(game.current_player(), Player::O);
        game.play(Position::TopLeft).unwrap();
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Match::new();
        game.play(Position::Center).unwrap();
        let before = game.clone();

        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_top_row_win_stops_match() {
        let mut game = Match::new();
        let status = play_numbers(&mut game, &[1, 5, 2, 6, 3]);
        assert_eq!(status, GameStatus::Won(Player::X));
        assert_eq!(game.history().len(), 5);
        assert_eq!(game.play(Position::BottomLeft), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_board_draw() {
        let mut game = Match::new();
        let status = play_numbers(&mut game, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);
        assert_eq!(status, GameStatus::Draw);
        assert!(!check_win(game.board(), Player::X));
        assert!(!check_win(game.board(), Player::O));
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let mut game = Match::new();
        // X O X / O X O / O X X, completed by X on square 9.
        let status = play_numbers(&mut game, &[1, 2, 3, 4, 5, 6, 8, 7, 9]);
        assert!(crate::rules::is_full(game.board()));
        assert_eq!(status, GameStatus::Won(Player::X));
    }
}
