use derive_more::{Display, Error, From};
use outflank_othello::OthelloError;
use std::io;

/// Failures that end a session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// The engine refused a request it should never have been given.
    #[display(fmt = "{}", _0)]
    Engine(OthelloError),

    #[display(fmt = "console I/O failed: {}", _0)]
    Io(io::Error),
}
