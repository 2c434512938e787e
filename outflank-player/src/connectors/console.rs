//! Text presentation: renders the board and reads moves and setup answers.
//!
//! Moves are written `row,column` with a 1-based row number and a column
//! letter, e.g. `2,B` for `Location { row: 1, col: 1 }`.

use super::{Action, Connector};
use crate::config::Opponent;
use crate::session::{Event, GameResult};
use crate::SessionError;
use derive_more::{Display, Error};
use outflank_othello::{column_letter, Board, Location, Outcome, TurnController};
use std::fmt;
use std::io::{self, BufRead, Write};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseMoveError {
    #[display(fmt = "expected 'row,column'")]
    Format,
    #[display(fmt = "row must be between 1 and {}", size)]
    Row { size: usize },
    #[display(fmt = "column must be between A and {}", last)]
    Column { last: char },
}

/// Parse `row,column` notation (or `Q` to quit) for a board of `size` rows and columns.
pub fn parse_move(input: &str, size: usize) -> Result<Action, ParseMoveError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Ok(Action::Quit);
    }

    let mut parts = input.split(',').map(str::trim);
    let (row_str, col_str) = match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => (row, col),
        _ => return Err(ParseMoveError::Format),
    };

    let row: usize = row_str.parse().map_err(|_| ParseMoveError::Format)?;
    if row < 1 || row > size {
        return Err(ParseMoveError::Row { size });
    }

    let last = column_letter(size - 1);
    let mut col_chars = col_str.chars();
    let col = match (col_chars.next(), col_chars.next()) {
        (Some(letter), None) => (0..size)
            .find(|&col| column_letter(col) == letter.to_ascii_uppercase())
            .ok_or(ParseMoveError::Column { last })?,
        _ => return Err(ParseMoveError::Format),
    };

    Ok(Action::Place(Location::new(row - 1, col)))
}

/// Write `loc` in `row,column` notation.
pub fn format_move(loc: Location) -> String {
    format!("{},{}", loc.row + 1, column_letter(loc.col))
}

/// A console over any line-based input and writable output.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal before drawing each turn's board.
    pub fn clearing_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line without its terminator, or None at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    pub fn say(&mut self, message: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    /// Ask until a non-blank name is given.
    pub fn ask_name(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(prompt)?;
        while let Some(line) = self.read_line()? {
            let name = line.trim();
            if !name.is_empty() {
                return Ok(Some(name.to_string()));
            }
            self.say("Invalid input. Please enter a valid name:")?;
        }
        Ok(None)
    }

    pub fn ask_opponent(&mut self) -> io::Result<Option<Opponent>> {
        self.say("Do you want to play against another player (P) or the computer (C)?")?;
        while let Some(line) = self.read_line()? {
            match line.trim().to_ascii_uppercase().as_str() {
                "P" => return Ok(Some(Opponent::Human)),
                "C" => return Ok(Some(Opponent::Computer)),
                _ => self.say(
                    "Invalid input. Please enter 'P' for another player or 'C' for computer:",
                )?,
            }
        }
        Ok(None)
    }

    pub fn ask_board_size(&mut self) -> io::Result<Option<usize>> {
        self.say("Please choose board size by entering the corresponding number:")?;
        self.say("1 - 6X6")?;
        self.say("2 - 8X8")?;
        while let Some(line) = self.read_line()? {
            match line.trim() {
                "1" => return Ok(Some(6)),
                "2" => return Ok(Some(8)),
                _ => self.say("Invalid input. Please enter a valid choice")?,
            }
        }
        Ok(None)
    }

    /// End of input counts as "no".
    pub fn ask_play_again(&mut self) -> io::Result<bool> {
        self.say("Do you want to play again? (Y/N)")?;
        while let Some(line) = self.read_line()? {
            match line.trim().to_ascii_uppercase().as_str() {
                "Y" => return Ok(true),
                "N" => return Ok(false),
                _ => self.say("Invalid input. Please enter 'Y' for Yes or 'N' for No:")?,
            }
        }
        Ok(false)
    }

    pub fn show_board(&mut self, board: &Board) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        self.say(board)
    }

    pub fn show_result(&mut self, result: &GameResult) -> io::Result<()> {
        let message = match result {
            GameResult::Quit => return self.say("Game abandoned."),
            GameResult::Finished { outcome, score } => match outcome {
                Outcome::Tie => format!("The game is a tie ({} - {}).", score.0, score.1),
                winner => format!("The winner is: {} ({} - {})", winner, score.0, score.1),
            },
        };
        self.say(message)
    }
}

impl<R: BufRead, W: Write> Connector for Console<R, W> {
    fn next_move(&mut self, game: &TurnController) -> Result<Action, SessionError> {
        let player = game.current_player();
        let size = game.board().size();
        self.say(format_args!(
            "{}, place your token ({}) by entering your move as 'row,column' (e.g. 2,B) or 'Q' to quit:",
            player.name, player.token
        ))?;

        while let Some(line) = self.read_line()? {
            match parse_move(&line, size) {
                Ok(action) => return Ok(action),
                Err(error) => self.say(format_args!(
                    "Invalid input: {}. Please enter your move as 'row,column' (e.g. 2,B):",
                    error
                ))?,
            }
        }

        Ok(Action::Quit)
    }

    fn notify(&mut self, event: &Event<'_>, game: &TurnController) -> Result<(), SessionError> {
        match event {
            Event::TurnStarted { .. } => self.show_board(game.board())?,
            Event::Moved {
                player, location, ..
            } => self.say(format_args!(
                "{} made a move at {}",
                player.name,
                format_move(*location)
            ))?,
            Event::Rejected {
                player, location, ..
            } => self.say(format_args!(
                "{} is not a legal move for {}. Try another one.",
                format_move(*location),
                player.name
            ))?,
            Event::Skipped { player } => self.say(format_args!(
                "{} has no valid moves. Skipping turn.",
                player.name
            ))?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outflank_othello::{Player, Token, TokenPair};

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn parse_move_notation() {
        assert_eq!(parse_move("2,B", 6), Ok(Location::new(1, 1).into()));
        assert_eq!(parse_move(" 8 , h ", 8), Ok(Location::new(7, 7).into()));
        assert_eq!(parse_move("1,a", 6), Ok(Location::new(0, 0).into()));
        assert_eq!(parse_move("q", 6), Ok(Action::Quit));
        assert_eq!(parse_move("Q", 6), Ok(Action::Quit));
    }

    #[test]
    fn parse_move_failures() {
        assert_eq!(parse_move("", 6), Err(ParseMoveError::Format));
        assert_eq!(parse_move("2B", 6), Err(ParseMoveError::Format));
        assert_eq!(parse_move("2,B,C", 6), Err(ParseMoveError::Format));
        assert_eq!(parse_move("x,B", 6), Err(ParseMoveError::Format));
        assert_eq!(parse_move("2,BB", 6), Err(ParseMoveError::Format));
        assert_eq!(parse_move("0,B", 6), Err(ParseMoveError::Row { size: 6 }));
        assert_eq!(parse_move("7,B", 6), Err(ParseMoveError::Row { size: 6 }));
        assert_eq!(
            parse_move("2,G", 6),
            Err(ParseMoveError::Column { last: 'F' })
        );
    }

    #[test]
    fn format_move_notation() {
        assert_eq!(format_move(Location::new(1, 1)), "2,B");
        assert_eq!(format_move(Location::new(7, 0)), "8,A");
    }

    #[test]
    fn ask_name_skips_blank_lines() {
        let mut console = console("\n   \nAda\n");
        assert_eq!(console.ask_name("Name?").unwrap(), Some("Ada".to_string()));
        let out = output(console);
        assert_eq!(out.matches("Invalid input").count(), 2);
    }

    #[test]
    fn setup_questions() {
        let mut console = console("x\nc\n3\n2\nmaybe\ny\n");
        assert_eq!(console.ask_opponent().unwrap(), Some(Opponent::Computer));
        assert_eq!(console.ask_board_size().unwrap(), Some(8));
        assert!(console.ask_play_again().unwrap());
    }

    #[test]
    fn end_of_input() {
        let mut console = console("");
        assert_eq!(console.ask_name("Name?").unwrap(), None);
        assert_eq!(console.ask_opponent().unwrap(), None);
        assert_eq!(console.ask_board_size().unwrap(), None);
        assert!(!console.ask_play_again().unwrap());
    }

    #[test]
    fn next_move_retries_bad_input() {
        let board = Board::starting(6, TokenPair::STANDARD).unwrap();
        let game = TurnController::new(
            board,
            Player::new("Ada", Token::new('X')),
            Player::new("Bob", Token::new('O')),
        )
        .unwrap();

        let mut console = console("nonsense\n9,A\n2,C\n");
        assert_eq!(
            console.next_move(&game).unwrap(),
            Action::Place(Location::new(1, 2))
        );
        let out = output(console);
        assert!(out.starts_with("Ada, place your token (X)"));
        assert_eq!(out.matches("Invalid input").count(), 2);

        let mut console = self::console("");
        assert_eq!(console.next_move(&game).unwrap(), Action::Quit);
    }
}
