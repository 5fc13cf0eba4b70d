//! Play-again loop around individual games.

use crate::console::{Console, FIRST_NAME_PROMPT, InputError, SECOND_NAME_PROMPT};
use crate::games::tictactoe::{Game, GameStatus, Player};
use derive_getters::Getters;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Banner printed once at startup.
pub const WELCOME: &str = "Welcome to the tic-tac-toe game!";

/// Tally of finished games, kept by seat.
///
/// Names are collected afresh for every game, so wins are counted for the
/// first and second seat rather than for a person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Games that reached a terminal status.
    games_played: u32,
    /// Games that ended in a draw.
    draws: u32,
    /// Games won by the first player (X).
    wins_by_first: u32,
    /// Games won by the second player (O).
    wins_by_second: u32,
}

impl SessionSummary {
    /// Records the final status of one game. In-progress statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress => return,
            GameStatus::Draw => self.draws += 1,
            GameStatus::Won(Player::One) => self.wins_by_first += 1,
            GameStatus::Won(Player::Two) => self.wins_by_second += 1,
        }
        self.games_played += 1;
    }
}

/// A console session: one or more games until the players stop.
#[derive(Debug)]
pub struct Session<R, W> {
    console: Console<R, W>,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a new session on the given console.
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            console,
            summary: SessionSummary::default(),
        }
    }

    /// Returns the tally so far.
    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Consumes the session, returning its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Collects both names and builds a fresh game.
    #[instrument(skip(self))]
    pub fn set_up_game(&mut self) -> Result<Game, InputError> {
        let name_one = self.console.read_name(FIRST_NAME_PROMPT)?;
        let name_two = self.console.read_name(SECOND_NAME_PROMPT)?;
        Ok(Game::new(name_one, name_two))
    }

    /// Plays one complete game and returns its final status.
    #[instrument(skip(self))]
    pub fn play_one(&mut self) -> Result<GameStatus, InputError> {
        let mut game = self.set_up_game()?;
        self.console
            .say(&format!("{} vs {} -- Let's go!", game.name_one(), game.name_two()))?;

        let status = game.play(&mut self.console)?;
        game.report_outcome(&mut self.console)?;
        self.summary.record(status);
        Ok(status)
    }

    /// Runs games until the players decline another one.
    ///
    /// Running out of input ends the session the same way answering `n`
    /// does; only console write failures are returned as errors.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionSummary, InputError> {
        self.console.say(WELCOME)?;

        let result = self.game_loop();
        let summary = self.summary;
        info!(?summary, "Session over");
        match result {
            Ok(()) | Err(InputError::Closed) => Ok(summary),
            Err(e) => Err(e),
        }
    }

    fn game_loop(&mut self) -> Result<(), InputError> {
        loop {
            self.play_one()?;
            if !self.console.ask_play_again()? {
                return Ok(());
            }
        }
    }
}
