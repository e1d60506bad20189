use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, ColoredCard},
    constants::*,
};

/// An ordered pile of face-down cards. The top of the pile is the end of the
/// vector.
#[derive(Debug)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// A full, unshuffled 108 card deck.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Number(*number)));
            }

            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Skip));
            }

            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Reverse));
            }

            for _ in 0..DRAW_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Draw));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_CARDS_IN_DECK {
            cards.push(Card::WildDraw);
        }

        Self(cards)
    }

    /// Fisher-Yates shuffle; every permutation is equally likely.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    /// Takes `count` cards off the top, or nothing if the pile is too short.
    pub(crate) fn draw_cards(&mut self, count: usize) -> Option<Vec<Card>> {
        let remaining = self.0.len().checked_sub(count)?;
        let mut cards = self.0.split_off(remaining);
        cards.reverse();
        Some(cards)
    }

    pub(crate) fn draw_card(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub(crate) fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.0.extend(cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }
}

/// A freshly built, shuffled deck.
pub fn build_deck<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    let mut deck = Deck::new();
    deck.shuffle(rng);
    deck
}
