//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (no blank cells left).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.marks().iter().all(|m| *m != Mark::Blank)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Position;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_marks([Mark::X; 9]);
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Mark::{O, X};
        // X O O / O X X / X X O
        let board = Board::from_marks([X, O, O, O, X, X, X, X, O]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Mark::{O, X};
        // X X X / O O X / O X O
        let board = Board::from_marks([X, X, X, O, O, X, O, X, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
