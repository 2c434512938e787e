//! Runs games: the per-turn loop, skipped turns, retries and the replay loop.

use crate::config::{Cli, GameSetup};
use crate::connectors::{Action, Connector, Console};
use crate::SessionError;
use outflank_othello::{Location, OthelloError, Outcome, Player, TurnController};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Something worth showing to the people at the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event<'a> {
    /// `player` is about to be asked for a move.
    TurnStarted { player: &'a Player },
    Moved {
        player: &'a Player,
        location: Location,
        flipped: usize,
    },
    /// The move was refused; the same player is asked again.
    Rejected {
        player: &'a Player,
        location: Location,
        error: OthelloError,
    },
    /// `player` had no legal move and the turn passed.
    Skipped { player: &'a Player },
}

/// How a single game ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameResult {
    Finished {
        outcome: Outcome,
        score: (usize, usize),
    },
    Quit,
}

/// Play `game` to the end, asking `connector` for every move.
///
/// Before each turn the game-over check runs first; a player with no legal move
/// is skipped. Illegal moves are reported and asked for again. Any other engine
/// error is a contract violation and ends the session.
pub fn play_game<C: Connector + ?Sized>(
    game: &mut TurnController,
    connector: &mut C,
) -> Result<GameResult, SessionError> {
    info!(
        first = %game.player(outflank_othello::Seat::First).name,
        second = %game.player(outflank_othello::Seat::Second).name,
        size = game.board().size(),
        "game started"
    );

    while !game.is_game_over() {
        if !game.can_move(game.current_seat()) {
            info!(player = %game.current_player().name, "no legal move, skipping turn");
            connector.notify(
                &Event::Skipped {
                    player: game.current_player(),
                },
                game,
            )?;
            game.switch_turn();
            continue;
        }

        connector.notify(
            &Event::TurnStarted {
                player: game.current_player(),
            },
            game,
        )?;

        loop {
            let location = match connector.next_move(game)? {
                Action::Place(location) => location,
                Action::Quit => {
                    info!(player = %game.current_player().name, "session quit");
                    return Ok(GameResult::Quit);
                }
            };

            match game.apply_move(location) {
                Ok(flipped) => {
                    connector.notify(
                        &Event::Moved {
                            player: game.current_player(),
                            location,
                            flipped,
                        },
                        game,
                    )?;
                    break;
                }
                Err(error @ OthelloError::IllegalMove { .. }) => {
                    warn!(player = %game.current_player().name, %error, "move rejected");
                    connector.notify(
                        &Event::Rejected {
                            player: game.current_player(),
                            location,
                            error,
                        },
                        game,
                    )?;
                }
                Err(error) => return Err(error.into()),
            }
        }

        game.switch_turn();
    }

    let outcome = game.winner();
    let score = game.score();
    info!(winner = %outcome, first = score.0, second = score.1, "game over");
    Ok(GameResult::Finished { outcome, score })
}

/// Set up and play games on `console` until the players stop or input runs out.
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    loop {
        let setup = match GameSetup::resolve(cli, console)? {
            Some(setup) => setup,
            None => break,
        };

        let mut game = setup.new_game()?;
        let mut seating = setup.seating(&mut *console, &game);
        let result = play_game(&mut game, &mut seating)?;

        console.show_board(game.board())?;
        console.show_result(&result)?;

        if result == GameResult::Quit || cli.once || !console.ask_play_again()? {
            break;
        }
    }

    console.say("Thank you for playing! Goodbye.")?;
    Ok(())
}
