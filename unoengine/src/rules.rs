use crate::{
    card::{Card, ColoredCard, PlayedCard},
    constants::{ACTION_CARD_POINTS, WILD_CARD_POINTS},
};

/// Whether `card` may go on top of `top`.
pub fn can_play(card: &Card, top: &PlayedCard) -> bool {
    match card {
        Card::Wild | Card::WildDraw => true,
        Card::Colored(color, face) => {
            if *color == top.color() {
                return true;
            }
            match (face, top) {
                (
                    ColoredCard::Number(number),
                    PlayedCard::Colored(_, ColoredCard::Number(top_number)),
                ) => number == top_number,
                (face, PlayedCard::Colored(_, top_face)) if face.is_action() => face == top_face,
                _ => false,
            }
        }
    }
}

/// Penalty points left in a hand at the end of a round.
pub fn score(hand: &[Card]) -> u32 {
    hand.iter()
        .map(|card| match card {
            Card::Colored(_, ColoredCard::Number(number)) => u32::from(*number),
            Card::Colored(_, _) => ACTION_CARD_POINTS,
            Card::Wild | Card::WildDraw => WILD_CARD_POINTS,
        })
        .sum()
}
