//! Cell addressing for the 3x3 grid.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board.
///
/// Players address cells by 1-based row and column; the board stores them
/// row-major at index `(row - 1) * 3 + (col - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Row 1, column 1 (index 0)
    TopLeft,
    /// Row 1, column 2 (index 1)
    TopCenter,
    /// Row 1, column 3 (index 2)
    TopRight,
    /// Row 2, column 1 (index 3)
    MiddleLeft,
    /// Row 2, column 2 (index 4)
    Center,
    /// Row 2, column 3 (index 5)
    MiddleRight,
    /// Row 3, column 1 (index 6)
    BottomLeft,
    /// Row 3, column 2 (index 7)
    BottomCenter,
    /// Row 3, column 3 (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from 1-based row and column.
    ///
    /// Returns `None` unless both lie in `1..=3`.
    #[instrument]
    pub fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
            return None;
        }
        Self::from_index(usize::from(row - 1) * 3 + usize::from(col - 1))
    }

    /// 1-based row of this cell.
    pub fn row(self) -> u8 {
        (self.to_index() / 3) as u8 + 1
    }

    /// 1-based column of this cell.
    pub fn col(self) -> u8 {
        (self.to_index() % 3) as u8 + 1
    }

    /// Filters positions by board state - returns only blank cells.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_blank(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (row {}, column {})", self.label(), self.row(), self.col())
    }
}
