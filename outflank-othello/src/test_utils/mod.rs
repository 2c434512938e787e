//! Utilities used for testing and benchmarking.

pub mod perft;
pub use perft::run_perft;

mod play;
pub use play::{random_playout, Ply};
