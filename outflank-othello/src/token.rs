//! Token identities and the pair of tokens in play.

use crate::OthelloError;
use derive_more::{Display, From, Into};

/// The glyph one participant places on the board.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, From, Into)]
pub struct Token(char);

impl Token {
    #[inline]
    pub const fn new(glyph: char) -> Self {
        Self(glyph)
    }

    #[inline]
    pub const fn glyph(self) -> char {
        self.0
    }
}

/// The two token identities sharing a board.
///
/// Passed explicitly to every board query so positions can be built from any
/// pair of glyphs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TokenPair {
    first: Token,
    second: Token,
}

impl TokenPair {
    /// The conventional pair: `X` moves first, `O` second.
    pub const STANDARD: Self = Self {
        first: Token::new('X'),
        second: Token::new('O'),
    };

    pub fn new(first: Token, second: Token) -> Result<Self, OthelloError> {
        if first == second {
            return Err(OthelloError::DuplicateToken { token: first });
        }
        Ok(Self { first, second })
    }

    #[inline]
    pub fn first(self) -> Token {
        self.first
    }

    #[inline]
    pub fn second(self) -> Token {
        self.second
    }

    /// The token opposing `mover`. Anything other than `first` is treated as `second`.
    #[inline]
    pub fn opponent(self, mover: Token) -> Token {
        if mover == self.first {
            self.second
        } else {
            self.first
        }
    }
}

impl Default for TokenPair {
    fn default() -> Self {
        Self::STANDARD
    }
}
