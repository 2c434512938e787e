//! Command-line configuration and per-game setup.

use crate::connectors::{Connector, Console, Seating};
use crate::SessionError;
use clap::{Parser, ValueEnum};
use outflank_othello::{Board, Player, Seat, TokenPair, TurnController};
use std::io::{self, BufRead, Write};

/// Name used for the computer opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// Play Othello in the terminal, against a friend or the computer.
#[derive(Parser, Debug, Default)]
#[command(name = "outflank", version, about, long_about = None)]
pub struct Cli {
    /// Board side length; asked for interactively if omitted
    #[arg(long, value_parser = parse_board_size)]
    pub size: Option<usize>,

    /// Who plays the second seat; asked for interactively if omitted
    #[arg(long, value_enum)]
    pub opponent: Option<Opponent>,

    /// Name of the first player (X)
    #[arg(long)]
    pub first_name: Option<String>,

    /// Name of the second player (O)
    #[arg(long)]
    pub second_name: Option<String>,

    /// Play a single game without asking to play again
    #[arg(long)]
    pub once: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Opponent {
    Human,
    Computer,
}

fn parse_board_size(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(size @ (6 | 8)) => Ok(size),
        _ => Err(format!("board size must be 6 or 8, got '{}'", s)),
    }
}

/// Everything needed to start one game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameSetup {
    pub size: usize,
    pub opponent: Opponent,
    pub first_name: String,
    pub second_name: String,
}

impl GameSetup {
    /// Fill in whatever `cli` leaves out by asking on `console`.
    /// Returns None if input ends before setup is complete.
    pub fn resolve<R: BufRead, W: Write>(
        cli: &Cli,
        console: &mut Console<R, W>,
    ) -> io::Result<Option<Self>> {
        let first_name = match &cli.first_name {
            Some(name) => name.clone(),
            None => match console.ask_name("Enter the name of Player 1:")? {
                Some(name) => name,
                None => return Ok(None),
            },
        };

        let opponent = match cli.opponent {
            Some(opponent) => opponent,
            None => match console.ask_opponent()? {
                Some(opponent) => opponent,
                None => return Ok(None),
            },
        };

        let second_name = match (&cli.second_name, opponent) {
            (Some(name), _) => name.clone(),
            (None, Opponent::Computer) => COMPUTER_NAME.to_string(),
            (None, Opponent::Human) => match console.ask_name("Enter the name of Player 2:")? {
                Some(name) => name,
                None => return Ok(None),
            },
        };

        let size = match cli.size {
            Some(size) => size,
            None => match console.ask_board_size()? {
                Some(size) => size,
                None => return Ok(None),
            },
        };

        Ok(Some(Self {
            size,
            opponent,
            first_name,
            second_name,
        }))
    }

    /// A fresh game: first player `X`, second `O`, starting cross in place.
    pub fn new_game(&self) -> Result<TurnController, SessionError> {
        let tokens = TokenPair::STANDARD;
        let board = Board::starting(self.size, tokens)?;
        let game = TurnController::new(
            board,
            Player::new(self.first_name.as_str(), tokens.first()),
            Player::new(self.second_name.as_str(), tokens.second()),
        )?;
        Ok(game)
    }

    /// Seat `human` for every player, except the second seat when it belongs to the computer.
    pub fn seating<H: Connector>(&self, human: H, game: &TurnController) -> Seating<H> {
        let seating = Seating::new(human);
        match self.opponent {
            Opponent::Computer => seating.with_computer(Seat::Second, game),
            Opponent::Human => seating,
        }
    }
}
