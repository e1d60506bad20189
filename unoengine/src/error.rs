use thiserror::Error;

use crate::card::{Card, PlayedCard};

/// Rejected play, draw or pass. The game is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveError {
    #[error("The round is already over")]
    GameOver,
    #[error("A color has to be chosen for the wild card first")]
    AwaitingColorChoice,
    #[error("It is not player {player}'s turn (player {current} is up)")]
    NotYourTurn { player: usize, current: usize },
    #[error("There is no card at index {index} (hand has {hand_size} cards)")]
    NoSuchCard { index: usize, hand_size: usize },
    #[error("{card} cannot be played on {top}")]
    CannotPlay { card: Card, top: PlayedCard },
    #[error("Passing is only allowed right after drawing a playable card")]
    NothingToPass,
}

/// Color choice submitted outside of the color choice phase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("The round is already over")]
    GameOver,
    #[error("No wild card is waiting for a color")]
    NoPendingWild,
}

/// Special call ("UNO!") that doesn't count.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidCallError {
    #[error("The round is already over")]
    GameOver,
    #[error("A color has to be chosen for the wild card first")]
    AwaitingColorChoice,
    #[error("There is no player {0}")]
    NoSuchPlayer(usize),
    #[error("UNO can only be called with exactly one card left (holding {0})")]
    HandSize(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
    #[error(transparent)]
    InvalidCall(#[from] InvalidCallError),
    #[error("Draw pile ran out while dealing ({needed} needed, {remaining} left)")]
    DeckExhausted { needed: usize, remaining: usize },
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
