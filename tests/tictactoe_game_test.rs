//! Tests for move application and the turn loop.

use std::collections::VecDeque;
use strictly_tictactoe_console::{
    Game, GameIo, GameStatus, InputError, Mark, MoveError, Player, Position,
};

/// Plays a fixed list of positions and records everything shown.
#[derive(Default)]
struct Scripted {
    moves: VecDeque<Position>,
    shown: Vec<String>,
    asked_for: Vec<Player>,
}

impl Scripted {
    fn new(moves: &[Position]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl GameIo for Scripted {
    fn read_move(&mut self, game: &Game) -> Result<Position, InputError> {
        self.asked_for.push(game.to_move());
        self.moves.pop_front().ok_or(InputError::Closed)
    }

    fn show(&mut self, text: &str) -> Result<(), InputError> {
        self.shown.push(text.to_string());
        Ok(())
    }
}

#[test]
fn test_new_game_is_blank_and_player_one_first() {
    let game = Game::new("Ann", "Bob");
    assert!(game.is_in_progress());
    assert_eq!(game.to_move(), Player::One);
    assert_eq!(game.name_one(), "Ann");
    assert_eq!(game.player_name(Player::Two), "Bob");
    assert!(game.board().marks().iter().all(|m| *m == Mark::Blank));
}

#[test]
fn test_apply_move_writes_mark_and_flips_turn() {
    let mut game = Game::new("Ann", "Bob");
    let mov = game.apply_move(Player::One, 2, 3).expect("legal move");
    assert_eq!(mov.position, Position::MiddleRight);
    assert_eq!(game.board().get(Position::MiddleRight), Mark::X);
    assert_eq!(game.to_move(), Player::Two);

    game.apply_move(Player::Two, 1, 1).expect("legal move");
    assert_eq!(game.board().get(Position::TopLeft), Mark::O);
    assert_eq!(game.to_move(), Player::One);
}

#[test]
fn test_apply_move_never_overwrites() {
    let mut game = Game::new("Ann", "Bob");
    game.apply_move(Player::One, 2, 2).expect("legal move");

    let err = game.apply_move(Player::Two, 2, 2).unwrap_err();
    assert_eq!(err, MoveError::CellOccupied(Position::Center));
    assert!(err.to_string().contains("occupied"));
    assert_eq!(game.board().get(Position::Center), Mark::X);
    assert_eq!(game.to_move(), Player::Two);
}

#[test]
fn test_apply_move_rejects_out_of_range() {
    let mut game = Game::new("Ann", "Bob");
    assert_eq!(
        game.apply_move(Player::One, 0, 2),
        Err(MoveError::OutOfRange { row: 0, col: 2 })
    );
    assert_eq!(
        game.apply_move(Player::One, 1, 4),
        Err(MoveError::OutOfRange { row: 1, col: 4 })
    );
    assert_eq!(game.to_move(), Player::One);
}

#[test]
fn test_apply_move_rejects_wrong_player() {
    let mut game = Game::new("Ann", "Bob");
    assert_eq!(
        game.apply_move(Player::Two, 1, 1),
        Err(MoveError::WrongPlayer(Player::Two))
    );
    assert!(game.board().is_blank(Position::TopLeft));
}

#[test]
fn test_apply_move_rejects_after_game_over() {
    let mut game = Game::new("Ann", "Bob");
    for (player, row, col) in [
        (Player::One, 1, 1),
        (Player::Two, 2, 1),
        (Player::One, 1, 2),
        (Player::Two, 2, 2),
        (Player::One, 1, 3),
    ] {
        game.apply_move(player, row, col).expect("legal move");
    }
    assert_eq!(game.status(), GameStatus::Won(Player::One));
    assert_eq!(game.apply_move(Player::Two, 3, 3), Err(MoveError::GameOver));
}

#[test]
fn test_play_until_win_renders_after_every_move() {
    use Position::*;
    let mut game = Game::new("Ann", "Bob");
    let mut io = Scripted::new(&[TopLeft, Center, TopCenter, BottomLeft, TopRight]);

    let status = game.play(&mut io).expect("scripted game completes");

    assert_eq!(status, GameStatus::Won(Player::One));
    // Initial board plus one render per move.
    assert_eq!(io.shown.len(), 6);
    assert_eq!(io.shown[0], "  |   |  \n---------\n  |   |  \n---------\n  |   |  ");
    assert_eq!(io.shown[5], game.board().render());
    assert_eq!(
        io.asked_for,
        [Player::One, Player::Two, Player::One, Player::Two, Player::One]
    );
}

#[test]
fn test_play_asks_same_player_again_after_rejected_move() {
    use Position::*;
    let mut game = Game::new("Ann", "Bob");
    let mut io = Scripted::new(&[
        Center, Center, TopLeft, TopRight, BottomLeft, TopCenter, BottomCenter, MiddleLeft,
        MiddleRight, BottomRight,
    ]);

    let status = game.play(&mut io).expect("scripted game completes");

    // X: C, TR, TC, ML, BR  O: TL, BL, BC, MR  ->  O X X / X X O / O O X
    assert_eq!(status, GameStatus::Draw);
    assert_eq!(io.asked_for[0], Player::One);
    assert_eq!(io.asked_for[1], Player::Two);
    assert_eq!(io.asked_for[2], Player::Two);
    assert_eq!(io.shown.len(), 10);
}

#[test]
fn test_play_stops_when_input_closes() {
    let mut game = Game::new("Ann", "Bob");
    let mut io = Scripted::new(&[Position::Center]);
    assert_eq!(game.play(&mut io), Err(InputError::Closed));
    assert!(game.is_in_progress());
}

#[test]
fn test_outcome_messages() {
    let mut game = Game::new("Ann", "Bob");
    assert_eq!(game.outcome_message(), None);

    let mut io = Scripted::new(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ]);
    game.play(&mut io).expect("scripted game completes");
    assert_eq!(game.status(), GameStatus::Won(Player::Two));

    game.report_outcome(&mut io).expect("show succeeds");
    assert_eq!(io.shown.last().map(String::as_str), Some("///////\nBob won!\n///////"));
}
