//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking the move generator against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Token, TokenPair};

/// Count leaves `depth` plies below the starting position of a `size` board.
/// Black (`first`) moves first; a forced pass counts as a ply.
pub fn run_perft(size: usize, depth: u64) -> u64 {
    let tokens = TokenPair::STANDARD;
    let board = Board::starting(size, tokens)
        .expect("perft needs a valid board size");
    leaves_below(&board, tokens.first(), tokens, depth, false)
}

fn leaves_below(board: &Board, mover: Token, tokens: TokenPair, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let opponent = tokens.opponent(mover);
    let mut all_moves = board.legal_moves(mover, tokens).peekable();
    if all_moves.peek().is_none() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, opponent, tokens, depth - 1, true);
    }

    all_moves
        .map(|mv| {
            let mut next = board.clone();
            next.apply_move(mv, mover, tokens)
                .expect("generated moves are on the board");
            leaves_below(&next, opponent, tokens, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(8, 1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(8, 2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(8, 3), 56);
}
