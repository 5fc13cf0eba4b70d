//! Strictly Tic-Tac-Toe - two players, one terminal.
//!
//! # Architecture
//!
//! - **Games**: the board, its status rules and the turn-taking game
//! - **Console**: line-based prompts that collect names and moves
//! - **Session**: the play-again loop around individual games
//!
//! # Example
//!
//! ```no_run
//! use strictly_tictactoe_console::{Console, Session};
//!
//! let mut session = Session::new(Console::stdio());
//! let summary = session.run().expect("console write failed");
//! println!("{} games played", summary.games_played());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, LogFilter};

// Crate-level exports - Console
pub use console::{
    COLUMN_PROMPT, Console, FIRST_NAME_PROMPT, GameIo, InputError, PLAY_AGAIN_PROMPT,
    ROW_PROMPT, SECOND_NAME_PROMPT,
};

// Crate-level exports - Session
pub use session::{Session, SessionSummary, WELCOME};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, Mark, Move, MoveError, Player, Position, rules,
};
