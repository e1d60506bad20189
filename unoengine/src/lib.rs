//! Rules engine and turn state machine for a four seat game of UNO: one human
//! seat, three computer seats.
//!
//! The presentation layer submits [`Intent`]s to a [`Game`] and renders the
//! [`GameSnapshot`] it gets back. Computer seats get their intents from
//! [`computer_player_step`].

pub mod card;
pub mod constants;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod pile;
pub mod player;
pub mod policy;
pub mod rules;
pub mod snapshot;
pub mod turn;

pub use crate::card::{Card, CardColor, CardKind, ColoredCard, PlayedCard};
pub use crate::error::{IllegalMoveError, InvalidCallError, InvalidStateError, UnoError};
pub use crate::game::Game;
pub use crate::policy::{autopilot_step, computer_player_step};
pub use crate::snapshot::{GameSnapshot, HandView, PlayerView};
pub use crate::turn::{Direction, Intent, Phase};
