use crate::card::Card;

#[derive(Debug)]
pub struct Player {
    pub id: u64,
    name: String,
    pub hand: Vec<Card>,
    is_human: bool,
}

impl Player {
    pub fn new(id: u64, name: String, is_human: bool) -> Self {
        Self {
            id,
            name,
            hand: Vec::new(),
            is_human,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_human(&self) -> bool {
        self.is_human
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }
}

/// The fixed table: "You" in seat 0, three computer seats after.
pub(crate) fn seat_players() -> Vec<Player> {
    (0..crate::constants::PLAYER_COUNT)
        .map(|seat| {
            if seat == crate::constants::HUMAN_SEAT {
                Player::new(seat as u64 + 1, "You".to_string(), true)
            } else {
                Player::new(seat as u64 + 1, format!("Player {}", seat + 1), false)
            }
        })
        .collect()
}
