use crate::{Board, Location, Token, TokenPair};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// One step of a recorded game.
#[derive(Clone, Debug)]
pub struct Ply {
    /// The position before the step.
    pub before: Board,
    pub mover: Token,
    /// None when `mover` had to pass.
    pub location: Option<Location>,
    /// The flip count the board predicted before the move.
    pub predicted_score: usize,
    /// The flip count reported when the move was applied.
    pub flipped: usize,
}

/// Play uniformly random legal moves from the starting position until neither
/// side can move, recording every ply. The same `seed` always yields the same game.
pub fn random_playout(size: usize, tokens: TokenPair, seed: u64) -> (Vec<Ply>, Board) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::starting(size, tokens)
        .expect("playouts need a valid board size");
    let mut mover = tokens.first();
    let mut plies = Vec::new();

    while board.any_valid_moves(tokens.first(), tokens)
        || board.any_valid_moves(tokens.second(), tokens)
    {
        let moves: Vec<Location> = board.legal_moves(mover, tokens).collect();
        let before = board.clone();

        let ply = match moves.choose(&mut rng) {
            Some(&loc) => {
                let predicted_score = board.move_score(loc, mover, tokens);
                let flipped = board
                    .apply_move(loc, mover, tokens)
                    .expect("generated moves are on the board");
                Ply {
                    before,
                    mover,
                    location: Some(loc),
                    predicted_score,
                    flipped,
                }
            }
            None => Ply {
                before,
                mover,
                location: None,
                predicted_score: 0,
                flipped: 0,
            },
        };

        plies.push(ply);
        mover = tokens.opponent(mover);
    }

    (plies, board)
}
