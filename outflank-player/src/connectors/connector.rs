use crate::session::Event;
use crate::SessionError;
use outflank_othello::{Location, TurnController};

/// What a connector wants to do on its turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Place(Location),
    Quit,
}

impl From<Location> for Action {
    fn from(loc: Location) -> Self {
        Self::Place(loc)
    }
}

/// An abstract interface to a way of supplying moves for the current player.
pub trait Connector {
    /// Get a move for `game.current_player()`. A rejected move is followed by
    /// another call for the same player.
    fn next_move(&mut self, game: &TurnController) -> Result<Action, SessionError>;

    /// Observe something that happened in the game.
    fn notify(&mut self, _event: &Event<'_>, _game: &TurnController) -> Result<(), SessionError> {
        Ok(())
    }
}

impl<C: Connector + ?Sized> Connector for &mut C {
    fn next_move(&mut self, game: &TurnController) -> Result<Action, SessionError> {
        (**self).next_move(game)
    }

    fn notify(&mut self, event: &Event<'_>, game: &TurnController) -> Result<(), SessionError> {
        (**self).notify(event, game)
    }
}
