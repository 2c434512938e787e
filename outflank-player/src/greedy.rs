//! The computer opponent: a single-ply greedy move picker.

use itertools::Itertools;
use outflank_othello::{Board, Location, OthelloError, Token, TokenPair};
use std::cmp::Reverse;
use tracing::debug;

/// A legal placement and the number of tokens it would flip.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub location: Location,
    pub score: usize,
}

/// Plays whichever legal move flips the most tokens right now.
///
/// No look-ahead and no randomness: the same board always yields the same move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GreedySelector {
    token: Token,
}

impl GreedySelector {
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    #[inline]
    pub fn token(&self) -> Token {
        self.token
    }

    /// Every legal move with its score, in row-major order.
    pub fn candidates(&self, board: &Board, tokens: TokenPair) -> Vec<Candidate> {
        board
            .legal_moves(self.token, tokens)
            .map(|location| Candidate {
                location,
                score: board.move_score(location, self.token, tokens),
            })
            .collect()
    }

    /// Pick the highest-scoring legal move. Ties go to the first in row-major
    /// order (smallest row, then smallest column).
    pub fn choose_move(&self, board: &Board, tokens: TokenPair) -> Result<Location, OthelloError> {
        let mut candidates = self.candidates(board, tokens);

        // Stable sort: equal scores keep their row-major order.
        candidates.sort_by_key(|candidate| Reverse(candidate.score));
        debug!(
            token = %self.token,
            candidates = %candidates
                .iter()
                .map(|c| format!("{}={}", c.location, c.score))
                .join(" "),
            "ranked greedy candidates"
        );

        candidates
            .first()
            .map(|best| best.location)
            .ok_or(OthelloError::NoLegalMove { token: self.token })
    }
}
