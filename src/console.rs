//! Line-oriented console front end.
//!
//! Every prompt is a blocking retry loop: it returns only once the player
//! typed something acceptable, or with [`InputError::Closed`] when input
//! ran out.

use crate::games::tictactoe::{Game, Position};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Prompt for the first player's name.
pub const FIRST_NAME_PROMPT: &str = "The name of the first person playing";
/// Prompt for the second player's name.
pub const SECOND_NAME_PROMPT: &str = "The name of the second person playing";
/// Prompt for the row of a move.
pub const ROW_PROMPT: &str = "Choose which row to place a mark in (between 1 and 3)";
/// Prompt for the column of a move.
pub const COLUMN_PROMPT: &str = "Choose which column to place a mark in (between 1 and 3)";
/// Prompt asking whether to start another game.
pub const PLAY_AGAIN_PROMPT: &str = "Would you like to play another game? Enter y or n";

const CHOOSE_CELL: &str = "Please choose a blank cell to mark.";
const BAD_INPUT: &str = "There's a problem with your input.";

/// Failure that ends a prompt loop without a value.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Input reached end of stream.
    #[display("Input closed")]
    Closed,
    /// Writing to the console failed.
    #[display("Console write failed: {_0}")]
    Write(#[error(not(source))] String),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::Write(err.to_string())
    }
}

/// The collaborator a [`Game`] talks to while it is played.
pub trait GameIo {
    /// Gets the next move for the player whose turn it is.
    ///
    /// Implementations should only return blank cells.
    fn read_move(&mut self, game: &Game) -> Result<Position, InputError>;

    /// Shows a block of text to the players.
    fn show(&mut self, text: &str) -> Result<(), InputError>;
}

/// Console reading player input from `R` and printing to `W`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Creates a console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a new console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a line.
    pub fn say(&mut self, text: &str) -> Result<(), InputError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompts until a non-blank line is entered and returns it trimmed.
    ///
    /// Read failures are reported to the player and the prompt repeats.
    #[instrument(skip(self))]
    pub fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        loop {
            write!(self.output, "{prompt}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    debug!("End of input");
                    return Err(InputError::Closed);
                }
                Ok(_) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        return Ok(trimmed.to_string());
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read input");
                    self.say(&format!("An error occurred reading your input ({e})."))?;
                }
            }
        }
    }

    /// Prompts for a player name.
    pub fn read_name(&mut self, prompt: &str) -> Result<String, InputError> {
        self.read_line(prompt)
    }

    /// Prompts until a whole number in `1..=3` is entered.
    #[instrument(skip(self))]
    pub fn read_coordinate(&mut self, prompt: &str) -> Result<u8, InputError> {
        loop {
            let input = self.read_line(prompt)?;
            match input.parse::<u8>() {
                Ok(value) if (1..=3).contains(&value) => return Ok(value),
                _ => {
                    debug!(%input, "Rejected coordinate");
                    self.say(BAD_INPUT)?;
                }
            }
        }
    }

    /// Asks whether to play again. Accepts `y` or `n` in either case.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self) -> Result<bool, InputError> {
        loop {
            match self.read_line(PLAY_AGAIN_PROMPT)?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {}
            }
        }
    }
}

impl<R: BufRead, W: Write> GameIo for Console<R, W> {
    /// Announces the turn, then asks for row and column until they name a
    /// blank cell.
    #[instrument(skip_all, fields(player = ?game.to_move()))]
    fn read_move(&mut self, game: &Game) -> Result<Position, InputError> {
        let player = game.to_move();
        self.say(&format!(
            "It's {}'s turn ({}).",
            game.player_name(player),
            player.mark()
        ))?;

        loop {
            self.say(CHOOSE_CELL)?;
            let row = self.read_coordinate(ROW_PROMPT)?;
            let col = self.read_coordinate(COLUMN_PROMPT)?;
            match Position::from_row_col(row, col) {
                Some(position) if game.board().is_blank(position) => return Ok(position),
                _ => debug!(row, col, "Cell taken, asking again"),
            }
        }
    }

    fn show(&mut self, text: &str) -> Result<(), InputError> {
        self.say(text)
    }
}
