use strum_macros::Display;

use crate::{card::Card, card::CardColor, constants::PLAYER_COUNT};

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    #[strum(serialize = "Counter-clockwise")]
    CounterClockwise,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// The seat `n` turns after `seat`.
    pub fn seat_after(self, seat: usize, n: usize) -> usize {
        let players = PLAYER_COUNT as isize;
        (seat as isize + self.step() * n as isize).rem_euclid(players) as usize
    }
}

/// Something a seat wants to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Play { player: usize, card_index: usize },
    ChooseColor(CardColor),
    Draw { player: usize },
    Pass { player: usize },
    SpecialCall { player: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingIntent,
    /// A wild card left the current player's hand and waits for its color.
    AwaitingColorChoice { pending: Card },
    RoundOver { winner: usize },
}

/// How many seats the turn moves on once a card resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Advance {
    Next,
    SkipNext,
}

impl Advance {
    pub(crate) fn steps(self) -> usize {
        match self {
            Advance::Next => 1,
            Advance::SkipNext => 2,
        }
    }
}
