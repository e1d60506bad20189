use rand::Rng;
use tracing::{info, warn};

use crate::{
    card::{Card, ColoredCard, PlayedCard},
    constants::{DRAW_TWO_PENALTY, INITIAL_HAND_SIZE, PLAYER_COUNT},
    deck::{build_deck, Deck},
    error::{Result, UnoError},
    player::Player,
    turn::Direction,
};

/// Gives every player their opening hand, seat 0 first.
pub fn deal(players: &mut [Player], draw_pile: &mut Deck) -> Result<()> {
    for player in players.iter_mut() {
        let remaining = draw_pile.cards_count();
        let cards = draw_pile
            .draw_cards(INITIAL_HAND_SIZE)
            .ok_or(UnoError::DeckExhausted {
                needed: INITIAL_HAND_SIZE,
                remaining,
            })?;
        player.hand.extend(cards);
    }
    Ok(())
}

#[derive(Debug)]
pub struct StartingCard {
    pub card: PlayedCard,
    /// Decks built because the draw pile ran out of non-wild cards.
    pub fresh_decks: usize,
}

/// Turns over cards until one that isn't wild shows up. Wild cards passed over
/// go back into the draw pile, which is then reshuffled.
pub fn establish_starting_card<R: Rng + ?Sized>(draw_pile: &mut Deck, rng: &mut R) -> StartingCard {
    let mut passed_over = Vec::new();
    let mut fresh_decks = 0;

    let (color, face) = loop {
        match draw_pile.draw_card() {
            Some(Card::Colored(color, face)) => break (color, face),
            Some(wild) => passed_over.push(wild),
            None => {
                fresh_decks += 1;
                warn!(
                    fresh_decks,
                    "no starting card left in draw pile, brought in a fresh deck"
                );
                draw_pile.extend(build_deck(rng).0);
            }
        }
    };

    if !passed_over.is_empty() {
        draw_pile.extend(passed_over);
        draw_pile.shuffle(rng);
    }

    let card = PlayedCard::Colored(color, face);
    info!(%card, "starting card turned over");

    StartingCard { card, fresh_decks }
}

/// Where play begins, given the starting card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opening {
    pub first_player: usize,
    pub direction: Direction,
    /// A seat that has to draw before play begins, and how many cards.
    pub penalty: Option<(usize, usize)>,
    pub description: String,
}

impl Opening {
    pub fn for_card(card: &PlayedCard, players: &[Player]) -> Self {
        let name = |seat: usize| players[seat % PLAYER_COUNT].name().to_string();
        match card {
            PlayedCard::Colored(_, ColoredCard::Skip) => Self {
                first_player: 1,
                direction: Direction::Clockwise,
                penalty: None,
                description: format!("Starting card is Skip - {} starts!", name(1)),
            },
            PlayedCard::Colored(_, ColoredCard::Reverse) => Self {
                first_player: PLAYER_COUNT - 1,
                direction: Direction::CounterClockwise,
                penalty: None,
                description: format!(
                    "Starting card is Reverse - {} starts!",
                    name(PLAYER_COUNT - 1)
                ),
            },
            PlayedCard::Colored(_, ColoredCard::Draw) => Self {
                first_player: 2,
                direction: Direction::Clockwise,
                penalty: Some((1, DRAW_TWO_PENALTY)),
                description: format!(
                    "Starting card is Draw Two - {} draws 2 cards, {} starts!",
                    name(1),
                    name(2)
                ),
            },
            _ => Self {
                first_player: 0,
                direction: Direction::Clockwise,
                penalty: None,
                description: "Game started!".to_string(),
            },
        }
    }
}
