//! A single playthrough: two named players sharing one board.

use super::action::{Move, MoveError};
use super::{Board, GameStatus, Player, Position};
use crate::console::{GameIo, InputError};
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

/// Banner printed around the winner's name.
const WIN_BORDER: &str = "///////";

/// Tic-tac-toe game between two named players.
///
/// Player one plays X and always moves first. The board starts blank and
/// is only changed through [`Game::apply_move`]; once the board reaches a
/// terminal status no further move is accepted.
#[derive(Debug, Clone, Getters)]
pub struct Game {
    /// Name of the player using X.
    name_one: String,
    /// Name of the player using O.
    name_two: String,
    /// The board.
    board: Board,
    /// Whose turn it is.
    #[getter(skip)]
    to_move: Player,
}

impl Game {
    /// Creates a new game on a blank board.
    #[instrument(skip_all, fields(name_one = %name_one.as_ref(), name_two = %name_two.as_ref()))]
    pub fn new(name_one: impl AsRef<str>, name_two: impl AsRef<str>) -> Self {
        Self {
            name_one: name_one.as_ref().to_string(),
            name_two: name_two.as_ref().to_string(),
            board: Board::new(),
            to_move: Player::One,
        }
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the name of the given player.
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.name_one,
            Player::Two => &self.name_two,
        }
    }

    /// Returns the status of the board.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Returns true while the board has no winner and a blank cell.
    pub fn is_in_progress(&self) -> bool {
        self.status().is_in_progress()
    }

    /// Places `player`'s mark at the 1-based `row` and `col`.
    ///
    /// The mark is written only into a blank cell and only by the player
    /// whose turn it is; on success the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the game is over, it is the other
    /// player's turn, the coordinates are off the board, or the cell is
    /// already marked. The board is unchanged in every error case.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn apply_move(&mut self, player: Player, row: u8, col: u8) -> Result<Move, MoveError> {
        if !self.is_in_progress() {
            return Err(MoveError::GameOver);
        }
        if player != self.to_move {
            return Err(MoveError::WrongPlayer(player));
        }
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfRange { row, col })?;
        if !self.board.is_blank(position) {
            return Err(MoveError::CellOccupied(position));
        }

        self.board.set(position, player.mark());
        self.to_move = player.opponent();

        let mov = Move::new(player, position);
        debug!(%mov, "Move applied");
        Ok(mov)
    }

    /// Runs the turn loop until the board is terminal.
    ///
    /// The board is shown once before the first move and again after every
    /// accepted move. A move the game rejects is logged and the same player
    /// is asked again.
    ///
    /// # Errors
    ///
    /// Propagates [`InputError`] from the collaborator, which ends the game
    /// early.
    #[instrument(skip_all, fields(name_one = %self.name_one, name_two = %self.name_two))]
    pub fn play<I: GameIo + ?Sized>(&mut self, io: &mut I) -> Result<GameStatus, InputError> {
        io.show(&self.board.render())?;

        while self.is_in_progress() {
            let player = self.to_move;
            let position = io.read_move(self)?;
            if let Err(e) = self.apply_move(player, position.row(), position.col()) {
                warn!(error = %e, ?player, "Move rejected, asking again");
                continue;
            }
            io.show(&self.board.render())?;
        }

        let status = self.status();
        info!(?status, "Game finished");
        Ok(status)
    }

    /// Returns the end-of-game announcement, or `None` while in progress.
    pub fn outcome_message(&self) -> Option<String> {
        match self.status() {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some("It's a draw!".to_string()),
            GameStatus::Won(player) => Some(format!(
                "{WIN_BORDER}\n{} won!\n{WIN_BORDER}",
                self.player_name(player)
            )),
        }
    }

    /// Shows the end-of-game announcement. Shows nothing while in progress.
    ///
    /// # Errors
    ///
    /// Propagates output failures from the collaborator.
    #[instrument(skip_all)]
    pub fn report_outcome<I: GameIo + ?Sized>(&self, io: &mut I) -> Result<(), InputError> {
        match self.outcome_message() {
            Some(message) => io.show(&message),
            None => Ok(()),
        }
    }
}
