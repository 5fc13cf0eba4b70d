//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules::{draw, win};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (plays X, moves first).
    One,
    /// Second player (plays O).
    Two,
}

impl Player {
    /// Both players, in the order they are checked and seated.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the mark this player writes on the board.
    pub fn mark(self) -> Mark {
        match self {
            Player::One => Mark::X,
            Player::Two => Mark::O,
        }
    }

    /// Returns the seat number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Looks up a player by seat number.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

/// Occupant of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    Blank,
    /// Player one's mark.
    X,
    /// Player two's mark.
    O,
}

impl Mark {
    /// Decodes a raw cell value.
    ///
    /// Values other than 0, 1 and 2 decode to [`Mark::Blank`] so that a
    /// corrupted cell still renders as an empty one.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Mark::X,
            2 => Mark::O,
            _ => Mark::Blank,
        }
    }

    /// Returns the player owning this mark, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Mark::Blank => None,
            Mark::X => Some(Player::One),
            Mark::O => Some(Player::Two),
        }
    }

    /// Returns the single-character symbol used when rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Blank => " ",
        }
    }
}

impl From<u8> for Mark {
    fn from(raw: u8) -> Self {
        Self::from_raw(raw)
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Separator line printed between rendered rows.
const ROW_SEPARATOR: &str = "---------";

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Marks in row-major order (0-8).
    marks: [Mark; 9],
}

impl Board {
    /// Creates a new blank board.
    pub fn new() -> Self {
        Self {
            marks: [Mark::Blank; 9],
        }
    }

    /// Creates a board from arbitrary contents.
    ///
    /// No consistency checks are made, so boards unreachable by legal play
    /// (both players holding a line, too many marks for one side) are fine.
    pub fn from_marks(marks: [Mark; 9]) -> Self {
        Self { marks }
    }

    /// Gets the mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.marks[pos.to_index()]
    }

    /// Checks if a cell is blank.
    pub fn is_blank(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Blank
    }

    /// Returns all marks in row-major order.
    pub fn marks(&self) -> &[Mark; 9] {
        &self.marks
    }

    /// Writes a mark without checking what was there.
    ///
    /// Callers validate the cell first; see `Game::apply_move`.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.marks[pos.to_index()] = mark;
    }

    /// Evaluates the board.
    ///
    /// A completed line wins outright, with player one checked first. With
    /// no completed line the game is in progress while any cell is blank,
    /// and drawn otherwise.
    #[instrument(skip(self), ret(level = "trace"))]
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = win::check_winner(self) {
            GameStatus::Won(winner)
        } else if draw::is_full(self) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Formats the board as a human-readable grid.
    pub fn render(&self) -> String {
        self.marks
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|mark| mark.symbol())
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{ROW_SEPARATOR}\n"))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true while moves can still be made.
    pub fn is_in_progress(self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
