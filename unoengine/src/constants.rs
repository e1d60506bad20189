use strum::EnumCount;

use crate::card::CardColor;

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const SKIP_CARDS_PER_COLOR: u8 = 2;
pub(crate) const REVERSE_CARDS_PER_COLOR: u8 = 2;
pub(crate) const DRAW_CARDS_PER_COLOR: u8 = 2;

pub(crate) const NUMBER_CARDS_IN_DECK: u8 = (NUMBER_CARDS_PER_COLOR.len() * CardColor::COUNT) as u8;
pub(crate) const SKIP_CARDS_IN_DECK: u8 = SKIP_CARDS_PER_COLOR * CardColor::COUNT as u8;
pub(crate) const REVERSE_CARDS_IN_DECK: u8 = REVERSE_CARDS_PER_COLOR * CardColor::COUNT as u8;
pub(crate) const DRAW_CARDS_IN_DECK: u8 = DRAW_CARDS_PER_COLOR * CardColor::COUNT as u8;

pub(crate) const WILD_CARDS_IN_DECK: u8 = 4;
pub(crate) const WILD_DRAW_CARDS_IN_DECK: u8 = 4;

pub const TOTAL_CARDS_IN_DECK: u8 = NUMBER_CARDS_IN_DECK
    + SKIP_CARDS_IN_DECK
    + REVERSE_CARDS_IN_DECK
    + DRAW_CARDS_IN_DECK
    + WILD_CARDS_IN_DECK
    + WILD_DRAW_CARDS_IN_DECK;

pub const PLAYER_COUNT: usize = 4;
pub const HUMAN_SEAT: usize = 0;
pub const INITIAL_HAND_SIZE: usize = 7;

pub(crate) const DRAW_TWO_PENALTY: usize = 2;
pub(crate) const WILD_DRAW_PENALTY: usize = 4;

pub(crate) const ACTION_CARD_POINTS: u32 = 20;
pub(crate) const WILD_CARD_POINTS: u32 = 50;

/// Chance that a computer seat plays a card it just drew instead of passing.
/// A tuning heuristic, not a rule.
pub const COMPUTER_REPLAY_CHANCE: f64 = 0.3;

/// Opponent hand size at or below which computer seats reach for skip/draw-two.
pub(crate) const THREAT_HAND_SIZE: usize = 2;
/// Own hand size above which computer seats get rid of wild cards early.
pub(crate) const LARGE_HAND_SIZE: usize = 5;
