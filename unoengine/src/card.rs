use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

/// Face of a card that carries a printed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    /// Draw two.
    Draw,
}

impl ColoredCard {
    pub fn is_action(&self) -> bool {
        !matches!(self, ColoredCard::Number(_))
    }
}

impl Display for ColoredCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColoredCard::Number(number) => write!(f, "{number}"),
            ColoredCard::Skip => write!(f, "Skip"),
            ColoredCard::Reverse => write!(f, "Reverse"),
            ColoredCard::Draw => write!(f, "Draw Two"),
        }
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum CardKind {
    Number,
    Action,
    Wild,
}

/// A card as it sits in a hand or in the draw pile. It never carries a chosen
/// color; see [`PlayedCard`] for that.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDraw,
}

impl Card {
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Colored(_, ColoredCard::Number(_)) => CardKind::Number,
            Card::Colored(_, _) => CardKind::Action,
            Card::Wild | Card::WildDraw => CardKind::Wild,
        }
    }

    /// Printed color. `None` for wild cards.
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDraw => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        self.kind() == CardKind::Wild
    }

    /// Resolves a wild card with the color its player nominated. Colored cards
    /// ignore `chosen` and keep their printed color.
    pub fn into_played_card(self, chosen: CardColor) -> PlayedCard {
        match self {
            Card::Colored(color, card) => PlayedCard::Colored(color, card),
            Card::Wild => PlayedCard::Wild(chosen),
            Card::WildDraw => PlayedCard::WildDraw(chosen),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => write!(f, "{color} {card}"),
            Card::Wild => write!(f, "Wild"),
            Card::WildDraw => write!(f, "Wild Draw Four"),
        }
    }
}

/// A card on the discard pile. Wild cards here always carry their chosen color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayedCard {
    Colored(CardColor, ColoredCard),
    Wild(CardColor),
    WildDraw(CardColor),
}

impl PlayedCard {
    /// The color the next card has to match: printed for colored cards,
    /// chosen for wild cards.
    pub fn color(&self) -> CardColor {
        match self {
            PlayedCard::Colored(color, _) => *color,
            PlayedCard::Wild(color) | PlayedCard::WildDraw(color) => *color,
        }
    }

    /// Chosen color of a resolved wild card.
    pub fn chosen_color(&self) -> Option<CardColor> {
        match self {
            PlayedCard::Colored(_, _) => None,
            PlayedCard::Wild(color) | PlayedCard::WildDraw(color) => Some(*color),
        }
    }

    pub fn kind(&self) -> CardKind {
        match self {
            PlayedCard::Colored(_, ColoredCard::Number(_)) => CardKind::Number,
            PlayedCard::Colored(_, _) => CardKind::Action,
            PlayedCard::Wild(_) | PlayedCard::WildDraw(_) => CardKind::Wild,
        }
    }

    /// Strips the chosen color. Used when the discard pile goes back into the
    /// draw pile.
    pub fn into_card(self) -> Card {
        match self {
            PlayedCard::Colored(color, card) => Card::Colored(color, card),
            PlayedCard::Wild(_) => Card::Wild,
            PlayedCard::WildDraw(_) => Card::WildDraw,
        }
    }
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayedCard::Colored(color, card) => write!(f, "{color} {card}"),
            PlayedCard::Wild(color) => write!(f, "Wild ({color})"),
            PlayedCard::WildDraw(color) => write!(f, "Wild Draw Four ({color})"),
        }
    }
}
