//! User-facing text for tic-tac-toe.

use super::{Board, MoveError, Player, Position};
use parlor_console::Rejection;
use strum::IntoEnumIterator;

/// Session welcome banner.
pub const WELCOME: &str = "========================================
        Welcome to Tic-Tac-Toe!
========================================
Players: X and O
Enter positions 1-9 to make your move
========================================";

/// Replay question.
pub const REPLAY_PROMPT: &str = "\nDo you want to play another game? (y/n): ";

/// Farewell line.
pub const FAREWELL: &str = "\nThank you for playing Tic-Tac-Toe! Goodbye!";

/// Draw announcement.
pub const DRAW: &str = "🤝 It's a draw! Good game both players!";

const SPACER: &str = "   |   |   ";
const DIVIDER: &str = "___|___|___";

/// Renders the board followed by the numbered position guide.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = Position::iter()
        .collect::<Vec<_>>()
        .chunks(3)
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|&p| board.get(p).symbol().to_string()).collect();
            format!(" {}", cells.join(" | "))
        })
        .collect();

    let mut lines = vec![String::new()];
    for (i, row) in rows.into_iter().enumerate() {
        lines.push(SPACER.to_string());
        lines.push(row);
        if i < 2 {
            lines.push(DIVIDER.to_string());
        }
    }
    lines.push(SPACER.to_string());

    lines.push(String::new());
    lines.push("Positions:".to_string());
    lines.push(" 1 | 2 | 3 ".to_string());
    lines.push(DIVIDER.to_string());
    lines.push(" 4 | 5 | 6 ".to_string());
    lines.push(DIVIDER.to_string());
    lines.push(" 7 | 8 | 9 ".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Prompt for the player to move.
pub fn move_prompt(player: Player) -> String {
    format!("Player {}, enter your move (1-9): ", player)
}

/// Win announcement.
pub fn win_message(player: Player) -> String {
    format!("🎉 Congratulations! Player {} wins!", player)
}

/// Message for a position token that failed to parse.
pub fn rejection_message(reason: &Rejection) -> &'static str {
    match reason {
        Rejection::OutOfRange { .. } => "Invalid position! Please enter a number between 1 and 9.",
        Rejection::Overflow(_) => "Number too large! Please enter a number between 1 and 9.",
        _ => "Invalid input! Please enter a number between 1 and 9.",
    }
}

/// Message for a move the rules refused.
pub fn move_error_message(err: &MoveError) -> &'static str {
    match err {
        MoveError::SquareOccupied(_) => "Position already taken! Please choose another position.",
        MoveError::OffBoard { .. } => "Invalid position! Please enter a number between 1 and 9.",
        MoveError::GameOver => "The game is already over.",
    }
}
