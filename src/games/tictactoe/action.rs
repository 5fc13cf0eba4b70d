//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated independently of being applied.

use super::{Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player.mark(), self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside `1..=3`.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },

    /// The cell at the position is already marked.
    #[display("{_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not player {}'s turn", _0.number())]
    WrongPlayer(#[error(not(source))] Player),
}
