//! Errors surfaced by the engine to its callers.

use crate::{Location, Token};
use derive_more::{Display, Error};

/// Everything that can go wrong when building or playing on a board.
///
/// None of these are retried inside the engine: [`IllegalMove`](Self::IllegalMove)
/// is an expected, recoverable condition (ask for another move), while the rest
/// indicate a caller bug.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum OthelloError {
    /// The location is off the board, occupied, or outflanks nothing.
    #[display(fmt = "illegal move at {}", location)]
    IllegalMove { location: Location },

    /// A move was requested for a token with no legal placement anywhere.
    #[display(fmt = "no legal move available for {}", token)]
    NoLegalMove { token: Token },

    /// A move was applied outside the grid.
    #[display(fmt = "{} is outside the {}x{} board", location, size, size)]
    OutOfBounds { location: Location, size: usize },

    /// Boards must be square with an even side of at least [`Board::MIN_SIZE`](crate::Board::MIN_SIZE).
    #[display(fmt = "invalid board size {}", size)]
    InvalidSize { size: usize },

    /// Both participants were given the same token.
    #[display(fmt = "both players cannot use token {}", token)]
    DuplicateToken { token: Token },
}
