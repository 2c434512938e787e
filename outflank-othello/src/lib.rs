//! `outflank-othello` is an Othello engine for square boards of any even size.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] holds the grid and the placement rules. It never tracks whose
//!    turn it is, and [`Board::apply_move`] trusts its caller to have checked
//!    [`Board::is_move_valid`] first.
//!  - [`TurnController`] is a safe, higher-level interface: it owns the board and
//!    both [`Player`]s, only accepts legal moves, and decides the [`Outcome`].

pub mod test_utils;

mod board;
mod error;
mod game;
mod location;
mod token;
mod utils;

pub use board::*;
pub use error::*;
pub use game::*;
pub use location::*;
pub use token::*;
pub use utils::column_letter;

/// The side length of a standard Othello board.
pub const EDGE_LENGTH: usize = 8;
