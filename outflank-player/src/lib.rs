//! `outflank-player` plays Othello against people and a greedy computer opponent.
//!
//!  - [`greedy`] holds the computer's move selection.
//!  - [`connectors`] supply moves to a game from the console or the computer.
//!  - [`session`] drives games turn by turn, and [`config`] sets them up.

pub mod config;
pub mod connectors;
pub mod greedy;
pub mod session;

mod error;

pub use error::SessionError;
