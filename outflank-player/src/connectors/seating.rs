use super::{Action, Connector, GreedyConnector};
use crate::session::Event;
use crate::SessionError;
use outflank_othello::{Seat, TurnController};

/// Routes each turn to the computer for seats it plays, and to the shared
/// human connector otherwise. Every event reaches the human connector.
pub struct Seating<H> {
    human: H,
    computers: [Option<GreedyConnector>; 2],
}

impl<H: Connector> Seating<H> {
    /// Both seats are played through `human`.
    pub fn new(human: H) -> Self {
        Self {
            human,
            computers: [None, None],
        }
    }

    /// Let the computer play `seat` with that seat's token.
    pub fn with_computer(mut self, seat: Seat, game: &TurnController) -> Self {
        self.computers[index(seat)] = Some(GreedyConnector::new(game.player(seat).token));
        self
    }

    pub fn is_computer(&self, seat: Seat) -> bool {
        self.computers[index(seat)].is_some()
    }

    pub fn into_human(self) -> H {
        self.human
    }
}

fn index(seat: Seat) -> usize {
    match seat {
        Seat::First => 0,
        Seat::Second => 1,
    }
}

impl<H: Connector> Connector for Seating<H> {
    fn next_move(&mut self, game: &TurnController) -> Result<Action, SessionError> {
        match &mut self.computers[index(game.current_seat())] {
            Some(computer) => computer.next_move(game),
            None => self.human.next_move(game),
        }
    }

    fn notify(&mut self, event: &Event<'_>, game: &TurnController) -> Result<(), SessionError> {
        self.human.notify(event, game)
    }
}
