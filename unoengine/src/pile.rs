use std::mem;

use rand::Rng;
use tracing::{debug, warn};

use crate::{
    card::{Card, PlayedCard},
    deck::{build_deck, Deck},
};

/// Draw pile plus discard pile. The discard pile always has a top card.
#[derive(Debug)]
pub struct Piles {
    draw: Deck,
    top: PlayedCard,
    /// Everything under the top card, oldest first.
    buried: Vec<PlayedCard>,
    fresh_decks: usize,
}

impl Piles {
    pub(crate) fn new(draw: Deck, top: PlayedCard, fresh_decks: usize) -> Self {
        Self {
            draw,
            top,
            buried: Vec::new(),
            fresh_decks,
        }
    }

    pub fn top(&self) -> &PlayedCard {
        &self.top
    }

    pub fn draw_count(&self) -> usize {
        self.draw.cards_count()
    }

    pub fn discard_count(&self) -> usize {
        self.buried.len() + 1
    }

    /// How many extra decks were brought in because both piles ran dry.
    pub fn fresh_decks(&self) -> usize {
        self.fresh_decks
    }

    pub(crate) fn discard(&mut self, card: PlayedCard) {
        let previous = mem::replace(&mut self.top, card);
        self.buried.push(previous);
    }

    /// Pops the top of the draw pile, reshuffling the discard pile underneath
    /// the top card when the draw pile is empty. If that still leaves nothing,
    /// a fresh deck is brought in.
    pub(crate) fn draw_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        loop {
            if let Some(card) = self.draw.draw_card() {
                return card;
            }
            if !self.reshuffle_discard(rng) {
                self.replenish(rng);
            }
        }
    }

    pub(crate) fn draw_cards<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<Card> {
        (0..count).map(|_| self.draw_card(rng)).collect()
    }

    fn reshuffle_discard<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.buried.is_empty() {
            return false;
        }

        let returned = self.buried.len();
        self.draw
            .extend(self.buried.drain(..).map(PlayedCard::into_card));
        self.draw.shuffle(rng);

        debug!(returned, "reshuffled discard pile into draw pile");
        true
    }

    fn replenish<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.draw = build_deck(rng);
        self.fresh_decks += 1;
        warn!(
            fresh_decks = self.fresh_decks,
            "draw and discard piles exhausted, brought in a fresh deck"
        );
    }
}
