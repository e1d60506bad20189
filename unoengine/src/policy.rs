//! Heuristic computer player. Not optimal, only predictable: ties are broken
//! uniformly at random with the game's own RNG, so a seeded game replays the
//! same decisions.

use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    card::{Card, CardColor, ColoredCard, PlayedCard},
    constants::{COMPUTER_REPLAY_CHANCE, LARGE_HAND_SIZE, THREAT_HAND_SIZE},
    game::Game,
    rules::can_play,
    turn::Intent,
};

/// Next intent for the seat whose turn it is, if that seat is computer
/// controlled and the round is still going. The caller feeds the intent back
/// through [`Game::submit`].
pub fn computer_player_step(game: &mut Game) -> Option<Intent> {
    let seat = game.current_player();
    if game.get_player(seat)?.is_human() {
        return None;
    }
    decide(game, seat)
}

/// Like [`computer_player_step`], but also plays the human seat, calling UNO
/// for it when one is owed.
pub fn autopilot_step(game: &mut Game) -> Option<Intent> {
    if !game.is_active() {
        return None;
    }
    let owed = (0..game.players().len()).find(|seat| game.uno_obligation(*seat));
    if let (Some(seat), None) = (owed, game.pending_wild()) {
        return Some(Intent::SpecialCall { player: seat });
    }
    decide(game, game.current_player())
}

fn decide(game: &mut Game, seat: usize) -> Option<Intent> {
    if !game.is_active() {
        return None;
    }

    let hand = game.get_player(seat)?.hand.clone();
    let top = game.top_card().clone();
    let opponent_hand_sizes: Vec<usize> = game
        .players()
        .iter()
        .enumerate()
        .filter(|(other, _)| *other != seat)
        .map(|(_, player)| player.cards_count())
        .collect();
    let awaiting_color = game.pending_wild().is_some();
    let drawn_playable = game.drawn_playable;
    let rng = &mut game.rng;

    let intent = if awaiting_color {
        Intent::ChooseColor(choose_color(&hand, rng))
    } else if let Some(card_index) = drawn_playable {
        replay_or_pass(seat, card_index, rng)
    } else {
        let playable = playable_indices(&hand, &top);
        match choose_card(&hand, &playable, &top, &opponent_hand_sizes, rng) {
            Some(card_index) => Intent::Play {
                player: seat,
                card_index,
            },
            None => Intent::Draw { player: seat },
        }
    };

    debug!(player = seat, ?intent, "computer decided");
    Some(intent)
}

pub fn playable_indices(hand: &[Card], top: &PlayedCard) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| can_play(card, top))
        .map(|(index, _)| index)
        .collect()
}

/// Picks which of the `playable` hand indices to play. First match wins:
/// 1. an opponent is close to going out: first skip or draw two,
/// 2. own hand is large: first wild,
/// 3. random card of the top card's color,
/// 4. random playable card.
pub fn choose_card<R: Rng + ?Sized>(
    hand: &[Card],
    playable: &[usize],
    top: &PlayedCard,
    opponent_hand_sizes: &[usize],
    rng: &mut R,
) -> Option<usize> {
    let threatened = opponent_hand_sizes
        .iter()
        .any(|count| *count <= THREAT_HAND_SIZE);
    if threatened {
        let blocker = playable.iter().copied().find(|index| {
            matches!(
                hand[*index],
                Card::Colored(_, ColoredCard::Skip) | Card::Colored(_, ColoredCard::Draw)
            )
        });
        if blocker.is_some() {
            return blocker;
        }
    }

    if hand.len() > LARGE_HAND_SIZE {
        let wild = playable.iter().copied().find(|index| hand[*index].is_wild());
        if wild.is_some() {
            return wild;
        }
    }

    let color_matches: Vec<usize> = playable
        .iter()
        .copied()
        .filter(|index| hand[*index].color() == Some(top.color()))
        .collect();
    if let Some(index) = color_matches.choose(rng) {
        return Some(*index);
    }

    playable.choose(rng).copied()
}

/// The color held most often in `hand`, ties broken at random. Wild cards
/// don't count towards any color.
pub fn choose_color<R: Rng + ?Sized>(hand: &[Card], rng: &mut R) -> CardColor {
    let counts: Vec<(CardColor, usize)> = CardColor::iter()
        .map(|color| {
            let count = hand
                .iter()
                .filter(|card| card.color() == Some(color))
                .count();
            (color, count)
        })
        .collect();
    let most = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let best: Vec<CardColor> = counts
        .into_iter()
        .filter(|(_, count)| *count == most)
        .map(|(color, _)| color)
        .collect();

    best[rng.gen_range(0..best.len())]
}

/// After drawing a playable card: play it now, or keep it and end the turn.
pub fn replay_or_pass<R: Rng + ?Sized>(player: usize, card_index: usize, rng: &mut R) -> Intent {
    if rng.gen_bool(COMPUTER_REPLAY_CHANCE) {
        Intent::Play { player, card_index }
    } else {
        Intent::Pass { player }
    }
}
