use crate::{
    card::{Card, PlayedCard},
    turn::Direction,
};

/// What a renderer may see of a hand: the human seat's cards, everyone else's
/// card backs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandView {
    Visible(Vec<Card>),
    Hidden(usize),
}

impl HandView {
    pub fn len(&self) -> usize {
        match self {
            HandView::Visible(cards) => cards.len(),
            HandView::Hidden(count) => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerView {
    pub seat: usize,
    pub id: u64,
    pub name: String,
    pub is_human: bool,
    pub hand: HandView,
    /// Holds one card and hasn't called UNO yet.
    pub uno_pending: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub players: Vec<PlayerView>,
    pub top_card: PlayedCard,
    pub direction: Direction,
    pub current_player: usize,
    pub last_action: String,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub active: bool,
    pub awaiting_color: bool,
    pub winner: Option<usize>,
    /// Points left in every hand, once the round is over.
    pub scores: Option<Vec<u32>>,
}

impl GameSnapshot {
    pub fn human_hand(&self) -> &[Card] {
        self.players
            .iter()
            .find_map(|player| match &player.hand {
                HandView::Visible(cards) if player.is_human => Some(cards.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}
