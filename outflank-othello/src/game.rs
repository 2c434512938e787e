//! Implements game-level Othello logic: players, turn order and the result.
//!
//! For correctness, callers should drive play through [`TurnController`]; the
//! raw [`Board`] applies moves without checking them.

use crate::{Board, Location, OthelloError, Token, TokenPair};
use std::fmt;
use tracing::debug;

/// A participant: a display name and the token they place.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Player {
    pub name: String,
    pub token: Token,
}

impl Player {
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Self {
            name: name.into(),
            token,
        }
    }
}

/// Which of the two registered players.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Seat {
    First,
    Second,
}

impl Default for Seat {
    /// Gets the starting seat.
    fn default() -> Self {
        Self::First
    }
}

impl std::ops::Not for Seat {
    type Output = Self;

    /// Gets the other seat.
    fn not(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// The result of a finished game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => f.write_str(&player.name),
            Outcome::Tie => f.write_str("Tie"),
        }
    }
}

/// Owns one game: the board, both players, and whose turn it is.
#[derive(Clone, Debug)]
pub struct TurnController {
    board: Board,
    players: [Player; 2],
    tokens: TokenPair,
    current: Seat,
}

impl TurnController {
    /// Start a game on `board` with `first` to move.
    /// The board is used as given; call [`Board::initialize`] beforehand for a fresh game.
    pub fn new(board: Board, first: Player, second: Player) -> Result<Self, OthelloError> {
        let tokens = TokenPair::new(first.token, second.token)?;
        Ok(Self {
            board,
            players: [first, second],
            tokens,
            current: Seat::default(),
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn tokens(&self) -> TokenPair {
        self.tokens
    }

    #[inline]
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::First => &self.players[0],
            Seat::Second => &self.players[1],
        }
    }

    #[inline]
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    #[inline]
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Place the current player's token at `loc`, returning the number of flipped tokens.
    /// The turn does not advance; see [`switch_turn`](Self::switch_turn).
    pub fn apply_move(&mut self, loc: Location) -> Result<usize, OthelloError> {
        let mover = self.current_player().token;
        if !self.board.is_move_valid(loc, mover, self.tokens) {
            return Err(OthelloError::IllegalMove { location: loc });
        }

        let flipped = self.board.apply_move(loc, mover, self.tokens)?;
        debug!(player = %self.current_player().name, %loc, flipped, "applied move");
        Ok(flipped)
    }

    /// Hand the turn to the other player, whether or not they can move.
    pub fn switch_turn(&mut self) {
        self.current = !self.current;
        debug!(player = %self.current_player().name, "turn switched");
    }

    /// Returns whether the player in `seat` has a legal move.
    pub fn can_move(&self, seat: Seat) -> bool {
        self.board.any_valid_moves(self.player(seat).token, self.tokens)
    }

    /// The game is over when neither player can move.
    pub fn is_game_over(&self) -> bool {
        !self.can_move(Seat::First) && !self.can_move(Seat::Second)
    }

    /// Token counts for the (first, second) players.
    pub fn score(&self) -> (usize, usize) {
        (
            self.board.count_tokens(self.tokens.first()),
            self.board.count_tokens(self.tokens.second()),
        )
    }

    /// The player holding more tokens, or [`Outcome::Tie`] on equal counts.
    pub fn winner(&self) -> Outcome {
        let (first, second) = self.score();
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::Winner(self.player(Seat::First).clone()),
            std::cmp::Ordering::Less => Outcome::Winner(self.player(Seat::Second).clone()),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}
