//! Whole games driven through scripted and greedy connectors.

use outflank_othello::{Board, Location, Outcome, Player, Seat, Token, TokenPair, TurnController};
use outflank_player::config::Cli;
use outflank_player::connectors::{format_move, Action, Connector, Console, Seating};
use outflank_player::session::{self, play_game, Event, GameResult};
use outflank_player::SessionError;
use std::collections::VecDeque;

const X: Token = Token::new('X');
const O: Token = Token::new('O');

/// Replays a fixed list of actions and records a summary of every event.
#[derive(Default)]
struct Script {
    actions: VecDeque<Action>,
    log: Vec<String>,
    moves: Vec<Location>,
}

impl Script {
    fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Connector for Script {
    fn next_move(&mut self, _game: &TurnController) -> Result<Action, SessionError> {
        Ok(self.actions.pop_front().unwrap_or(Action::Quit))
    }

    fn notify(&mut self, event: &Event<'_>, _game: &TurnController) -> Result<(), SessionError> {
        let line = match event {
            Event::TurnStarted { player } => format!("turn {}", player.name),
            Event::Moved {
                player,
                location,
                flipped,
            } => {
                self.moves.push(*location);
                format!("moved {} {} {}", player.name, location, flipped)
            }
            Event::Rejected {
                player, location, ..
            } => format!("rejected {} {}", player.name, location),
            Event::Skipped { player } => format!("skipped {}", player.name),
        };
        self.log.push(line);
        Ok(())
    }
}

fn game_on(board: Board) -> TurnController {
    TurnController::new(board, Player::new("Ada", X), Player::new("Bob", O))
        .unwrap()
}

fn new_game(size: usize) -> TurnController {
    game_on(Board::starting(size, TokenPair::STANDARD).unwrap())
}

#[test]
fn computer_against_computer_finishes() {
    for size in [6, 8] {
        let mut game = new_game(size);
        let mut seating = Seating::new(Script::default())
            .with_computer(Seat::First, &game)
            .with_computer(Seat::Second, &game);

        let result = play_game(&mut game, &mut seating).unwrap();
        assert!(game.is_game_over());

        let (first, second) = game.score();
        assert_eq!(
            result,
            GameResult::Finished {
                outcome: game.winner(),
                score: (first, second),
            }
        );

        let log = seating.into_human().log;
        assert!(log.iter().all(|line| !line.starts_with("rejected")));
        // Each placement adds exactly one token to the board.
        let placed = log.iter().filter(|line| line.starts_with("moved")).count();
        assert_eq!(placed, first + second - 4);
    }
}

#[test]
fn greedy_games_are_reproducible() {
    let play = || {
        let mut game = new_game(6);
        let mut seating = Seating::new(Script::default())
            .with_computer(Seat::First, &game)
            .with_computer(Seat::Second, &game);
        play_game(&mut game, &mut seating).unwrap();
        (game.board().clone(), seating.into_human().log)
    };
    assert_eq!(play(), play());
}

#[test]
fn illegal_move_is_retried() {
    let mut game = new_game(6);
    let mut script = Script::new([
        Action::Place(Location::new(0, 0)),
        Action::Place(Location::new(2, 2)),
        Action::Place(Location::new(1, 2)),
        Action::Quit,
    ]);

    let result = play_game(&mut game, &mut script).unwrap();
    assert_eq!(result, GameResult::Quit);
    assert_eq!(
        script.log,
        vec![
            "turn Ada",
            "rejected Ada (0, 0)",
            "rejected Ada (2, 2)",
            "moved Ada (1, 2) 1",
            "turn Bob",
        ]
    );
    assert_eq!(game.score(), (4, 1));
    assert_eq!(game.current_player().name, "Bob");
}

#[test]
fn player_without_moves_is_skipped() {
    // O cannot move anywhere; X can play (1, 3) and then nobody can move.
    let board = "XXXX
                 XOO.
                 XXXX
                 XXXX"
        .parse()
        .unwrap();
    let mut game = game_on(board);
    game.switch_turn();

    let mut script = Script::new([Action::Place(Location::new(1, 3))]);
    let result = play_game(&mut game, &mut script).unwrap();

    assert_eq!(
        script.log,
        vec!["skipped Bob", "turn Ada", "moved Ada (1, 3) 2"]
    );
    assert_eq!(
        result,
        GameResult::Finished {
            outcome: Outcome::Winner(Player::new("Ada", X)),
            score: (16, 0),
        }
    );
}

#[test]
fn finished_position_asks_nobody() {
    let board = "XXXXXX
                 XXXXXX
                 XXXXXX
                 OOOOOO
                 OOOOOO
                 OOOOOO"
        .parse()
        .unwrap();
    let mut game = game_on(board);
    let mut script = Script::default();

    let result = play_game(&mut game, &mut script).unwrap();
    assert_eq!(
        result,
        GameResult::Finished {
            outcome: Outcome::Tie,
            score: (18, 18),
        }
    );
    assert!(script.log.is_empty());
}

#[test]
fn off_board_moves_are_rejected_like_any_illegal_move() {
    let mut game = new_game(6);
    let mut script = Script::new([Action::Place(Location::new(6, 0)), Action::Quit]);

    assert_eq!(play_game(&mut game, &mut script).unwrap(), GameResult::Quit);
    assert_eq!(script.log, vec!["turn Ada", "rejected Ada (6, 0)"]);
}

#[test]
fn console_game_against_computer() {
    // Ada opens at 2,C; then quits on her second turn.
    let input = "Ada\nC\n1\n2,C\nq\n";
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let cli = Cli {
        once: true,
        ..Cli::default()
    };

    session::run(&cli, &mut console).unwrap();
    let out = String::from_utf8(console.into_output()).unwrap();

    assert!(out.contains("Ada made a move at 2,C"));
    assert!(out.contains("Computer made a move at "));
    assert!(out.contains("Game abandoned."));
    assert!(out.ends_with("Thank you for playing! Goodbye.\n"));
}

#[test]
fn console_replays_until_declined() {
    // Replay a computer-against-computer game by hand, then quit the rematch.
    let mut game = new_game(6);
    let mut seating = Seating::new(Script::default())
        .with_computer(Seat::First, &game)
        .with_computer(Seat::Second, &game);
    let expected = play_game(&mut game, &mut seating).unwrap();
    let moves = seating.into_human().moves;

    let mut input = String::from("Ada\nP\nBob\n1\n");
    for loc in &moves {
        input.push_str(&format_move(*loc));
        input.push('\n');
    }
    input.push_str("y\nAda\nP\nBob\n1\nq\n");

    let mut console = Console::new(input.as_bytes(), Vec::new());
    session::run(&Cli::default(), &mut console).unwrap();
    let out = String::from_utf8(console.into_output()).unwrap();

    let GameResult::Finished { outcome, score } = expected else {
        panic!("greedy game did not finish");
    };
    let summary = match outcome {
        Outcome::Tie => format!("The game is a tie ({} - {}).", score.0, score.1),
        winner => format!("The winner is: {} ({} - {})", winner, score.0, score.1),
    };
    assert_eq!(out.matches(&summary).count(), 1);
    assert_eq!(out.matches("Do you want to play again?").count(), 1);
    assert_eq!(out.matches("Game abandoned.").count(), 1);
    assert!(!out.contains("is not a legal move"));
}
