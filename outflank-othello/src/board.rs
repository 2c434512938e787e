//! Grid storage and the Othello placement rules.
//!
//! A [`Board`] knows nothing about whose turn it is: every query takes the
//! moving [`Token`] and the [`TokenPair`] in play. Turn order lives in
//! [`TurnController`](crate::TurnController).

use crate::{utils, Direction, Location, OthelloError, Token, TokenPair};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};
use std::str::FromStr;

/// A square Othello grid with an even side length.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Token>>,
}

impl Board {
    /// The smallest board that has room for the starting cross and a ring around it.
    pub const MIN_SIZE: usize = 4;

    /// Create an empty board with `size` rows and columns.
    pub fn new(size: usize) -> Result<Self, OthelloError> {
        if size < Self::MIN_SIZE || size % 2 != 0 {
            return Err(OthelloError::InvalidSize { size });
        }

        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Create a board already holding the starting position.
    pub fn starting(size: usize, tokens: TokenPair) -> Result<Self, OthelloError> {
        let mut board = Self::new(size)?;
        board.initialize(tokens);
        Ok(board)
    }

    /// Clear the board and place the four-token starting cross:
    /// `second` on the main diagonal of the center square, `first` on the other.
    pub fn initialize(&mut self, tokens: TokenPair) {
        self.cells.iter_mut().for_each(|cell| *cell = None);

        let middle = self.size / 2 - 1;
        self.set(Location::new(middle, middle), tokens.second());
        self.set(Location::new(middle + 1, middle + 1), tokens.second());
        self.set(Location::new(middle, middle + 1), tokens.first());
        self.set(Location::new(middle + 1, middle), tokens.first());
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The token at `loc`, or None if the cell is empty or off the board.
    #[inline]
    pub fn token_at(&self, loc: Location) -> Option<Token> {
        if loc.is_within(self.size) {
            self.cells[loc.to_index(self.size)]
        } else {
            None
        }
    }

    /// Read-only view of the grid, one slice per row.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Token>]> + '_ {
        self.cells.chunks(self.size)
    }

    #[inline]
    fn set(&mut self, loc: Location, token: Token) {
        let index = loc.to_index(self.size);
        self.cells[index] = Some(token);
    }

    /// Length of the opponent run starting next to `loc` in `direction`, if
    /// that run is capped by a `mover` token. Runs of length zero never count.
    fn flank_length(
        &self,
        loc: Location,
        direction: Direction,
        mover: Token,
        opponent: Token,
    ) -> Option<usize> {
        let mut run = 0;
        for next in loc.ray(direction, self.size) {
            match self.cells[next.to_index(self.size)] {
                Some(token) if token == opponent => run += 1,
                Some(token) if token == mover && run > 0 => return Some(run),
                _ => return None,
            }
        }
        None
    }

    /// Returns whether `mover` may place a token at `loc`.
    ///
    /// Off-board and occupied locations are simply invalid.
    pub fn is_move_valid(&self, loc: Location, mover: Token, tokens: TokenPair) -> bool {
        if !loc.is_within(self.size) || self.token_at(loc).is_some() {
            return false;
        }

        let opponent = tokens.opponent(mover);
        Direction::ALL
            .iter()
            .any(|&direction| self.flank_length(loc, direction, mover, opponent).is_some())
    }

    /// The number of opponent tokens a placement at `loc` would flip.
    ///
    /// Does not check that `loc` is empty; off-board locations score 0.
    pub fn move_score(&self, loc: Location, mover: Token, tokens: TokenPair) -> usize {
        if !loc.is_within(self.size) {
            return 0;
        }

        let opponent = tokens.opponent(mover);
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.flank_length(loc, direction, mover, opponent))
            .sum()
    }

    /// Place `mover` at `loc` and flip every outflanked run, returning the number flipped.
    ///
    /// Only the bounds are checked here. Callers gate on [`is_move_valid`](Self::is_move_valid):
    /// an occupied or non-outflanking location still receives the token.
    pub fn apply_move(
        &mut self,
        loc: Location,
        mover: Token,
        tokens: TokenPair,
    ) -> Result<usize, OthelloError> {
        if !loc.is_within(self.size) {
            return Err(OthelloError::OutOfBounds {
                location: loc,
                size: self.size,
            });
        }

        // Rays from one origin never overlap, so all flanks can be found before flipping.
        let opponent = tokens.opponent(mover);
        let flanks: ArrayVec<(Direction, usize), 8> = Direction::ALL
            .iter()
            .filter_map(|&direction| {
                self.flank_length(loc, direction, mover, opponent)
                    .map(|run| (direction, run))
            })
            .collect();

        self.set(loc, mover);
        let mut flipped = 0;
        for (direction, run) in flanks {
            for next in loc.ray(direction, self.size).take(run) {
                self.set(next, mover);
            }
            flipped += run;
        }

        Ok(flipped)
    }

    /// All legal placements for `mover`, in row-major order.
    pub fn legal_moves(
        &self,
        mover: Token,
        tokens: TokenPair,
    ) -> impl Iterator<Item = Location> + '_ {
        let size = self.size;
        (0..size * size)
            .map(move |index| Location::from_index(index, size))
            .filter(move |&loc| self.is_move_valid(loc, mover, tokens))
    }

    /// Returns whether `mover` has any legal placement.
    pub fn any_valid_moves(&self, mover: Token, tokens: TokenPair) -> bool {
        self.legal_moves(mover, tokens).next().is_some()
    }

    /// Count the cells holding `token`.
    pub fn count_tokens(&self, token: Token) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Some(token))
            .count()
    }

    /// Count the empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.size,
            self.cells
                .iter()
                .map(|cell| cell.map_or(utils::EMPTY_GLYPH, Token::glyph)),
            f,
        )
    }
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "board has no rows")]
    Empty,
    #[display(fmt = "row {} has {} cells, expected {}", row, found, expected)]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[display(fmt = "{}", error)]
    Size { error: OthelloError },
}

/// Parse a board from one line per row: `.` or `-` for an empty cell, any
/// other character for the token with that glyph.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        let size = rows.len();
        let mut board = Board::new(size)
            .map_err(|error| ParseBoardError::Size { error })?;

        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != size {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    found: glyphs.len(),
                    expected: size,
                });
            }

            for (col, &glyph) in glyphs.iter().enumerate() {
                if glyph != '.' && glyph != '-' {
                    board.set(Location::new(row, col), Token::new(glyph));
                }
            }
        }

        Ok(board)
    }
}
