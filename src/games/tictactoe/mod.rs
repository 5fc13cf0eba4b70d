mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use types::{Board, GameStatus, Mark, Player};
