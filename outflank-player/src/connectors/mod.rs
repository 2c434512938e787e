//! Connectors supply moves to a session, from a person or from the computer.

mod connector;
mod console;
mod greedy;
mod seating;

pub use connector::{Action, Connector};
pub use console::{format_move, parse_move, Console, ParseMoveError};
pub use greedy::GreedyConnector;
pub use seating::Seating;
