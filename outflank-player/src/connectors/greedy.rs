//! [`Connector`] for the computer opponent.

use super::{Action, Connector};
use crate::greedy::GreedySelector;
use crate::SessionError;
use outflank_othello::{Token, TurnController};

pub struct GreedyConnector {
    selector: GreedySelector,
}

impl GreedyConnector {
    pub fn new(token: Token) -> Self {
        Self {
            selector: GreedySelector::new(token),
        }
    }
}

impl Connector for GreedyConnector {
    fn next_move(&mut self, game: &TurnController) -> Result<Action, SessionError> {
        let loc = self.selector.choose_move(game.board(), game.tokens())?;
        Ok(Action::Place(loc))
    }
}
