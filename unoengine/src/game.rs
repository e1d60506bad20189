use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::{
    card::{Card, CardColor, ColoredCard, PlayedCard},
    constants::{DRAW_TWO_PENALTY, PLAYER_COUNT, TOTAL_CARDS_IN_DECK, WILD_DRAW_PENALTY},
    dealer::{self, Opening},
    deck::build_deck,
    error::{IllegalMoveError, InvalidCallError, InvalidStateError, Result},
    pile::Piles,
    player::{seat_players, Player},
    rules::{can_play, score},
    snapshot::{GameSnapshot, HandView, PlayerView},
    turn::{Advance, Direction, Intent, Phase},
};

#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    piles: Piles,
    current: usize,
    direction: Direction,
    phase: Phase,
    uno_obligations: [bool; PLAYER_COUNT],
    /// Hand index of a playable card the current player has just drawn.
    pub(crate) drawn_playable: Option<usize>,
    last_action: String,
    pub(crate) rng: StdRng,
}

impl Game {
    pub fn new() -> Result<Self> {
        Self::with_seed(thread_rng().gen())
    }

    /// A game whose shuffles and computer decisions replay identically.
    pub fn with_seed(seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut draw_pile = build_deck(&mut rng);
        let mut players = seat_players();
        dealer::deal(&mut players, &mut draw_pile)?;

        let starting = dealer::establish_starting_card(&mut draw_pile, &mut rng);
        let opening = Opening::for_card(&starting.card, &players);
        let mut piles = Piles::new(draw_pile, starting.card, starting.fresh_decks);

        if let Some((seat, count)) = opening.penalty {
            players[seat].hand.extend(piles.draw_cards(count, &mut rng));
        }

        info!(
            seed,
            top = %piles.top(),
            first_player = opening.first_player,
            "new game"
        );

        Ok(Game {
            players,
            piles,
            current: opening.first_player,
            direction: opening.direction,
            phase: Phase::AwaitingIntent,
            uno_obligations: [false; PLAYER_COUNT],
            drawn_playable: None,
            last_action: opening.description,
            rng,
        })
    }

    pub fn submit(&mut self, intent: Intent) -> Result<GameSnapshot> {
        let snapshot = match intent {
            Intent::Play { player, card_index } => self.submit_play(player, card_index)?,
            Intent::ChooseColor(color) => self.submit_color_choice(color)?,
            Intent::Draw { player } => self.submit_draw(player)?,
            Intent::Pass { player } => self.submit_pass(player)?,
            Intent::SpecialCall { player } => self.submit_special_call(player)?,
        };
        Ok(snapshot)
    }

    pub fn submit_play(
        &mut self,
        player: usize,
        card_index: usize,
    ) -> Result<GameSnapshot, IllegalMoveError> {
        self.ensure_turn(player)?;

        let hand = &self.players[player].hand;
        let card = hand.get(card_index).ok_or(IllegalMoveError::NoSuchCard {
            index: card_index,
            hand_size: hand.len(),
        })?;
        if !can_play(card, self.piles.top()) {
            return Err(IllegalMoveError::CannotPlay {
                card: card.clone(),
                top: self.piles.top().clone(),
            });
        }

        let card = self.players[player].hand.remove(card_index);
        self.drawn_playable = None;
        debug!(player, %card, "card played");

        match card {
            Card::Wild | Card::WildDraw => {
                self.last_action =
                    format!("{} played {}, choosing a color", self.name(player), card);
                self.phase = Phase::AwaitingColorChoice { pending: card };
            }
            Card::Colored(color, face) => {
                self.piles.discard(PlayedCard::Colored(color, face));
                let advance = self.resolve_colored(color, face);
                self.finish_turn(advance);
            }
        }

        Ok(self.snapshot())
    }

    pub fn submit_color_choice(
        &mut self,
        color: CardColor,
    ) -> Result<GameSnapshot, InvalidStateError> {
        let pending = match &self.phase {
            Phase::RoundOver { .. } => return Err(InvalidStateError::GameOver),
            Phase::AwaitingIntent => return Err(InvalidStateError::NoPendingWild),
            Phase::AwaitingColorChoice { pending } => pending.clone(),
        };
        self.phase = Phase::AwaitingIntent;

        let played = pending.into_played_card(color);
        debug!(player = self.current, %played, "wild color chosen");
        self.piles.discard(played.clone());

        let name = self.name(self.current);
        let advance = match played {
            PlayedCard::WildDraw(_) => {
                let victim = self.next_player();
                self.give_cards(victim, WILD_DRAW_PENALTY);
                self.last_action = format!(
                    "{} played Wild Draw Four! {} draws 4 cards. Color is now {}.",
                    name,
                    self.name(victim),
                    color
                );
                Advance::SkipNext
            }
            _ => {
                self.last_action = format!("{name} played Wild! Color is now {color}.");
                Advance::Next
            }
        };
        self.finish_turn(advance);

        Ok(self.snapshot())
    }

    /// The drawn card stays with the player; if it can be played right away the
    /// turn stays too, otherwise it moves on.
    pub fn submit_draw(&mut self, player: usize) -> Result<GameSnapshot, IllegalMoveError> {
        self.ensure_turn(player)?;

        let card = self.piles.draw_card(&mut self.rng);
        let playable = can_play(&card, self.piles.top());
        debug!(player, %card, playable, "card drawn");

        self.players[player].add_card(card);
        self.uno_obligations[player] = false;
        self.last_action = format!("{} drew a card", self.name(player));

        if playable {
            self.drawn_playable = Some(self.players[player].cards_count() - 1);
        } else {
            self.advance(Advance::Next);
        }

        Ok(self.snapshot())
    }

    /// Declines to play a card that was just drawn.
    pub fn submit_pass(&mut self, player: usize) -> Result<GameSnapshot, IllegalMoveError> {
        self.ensure_turn(player)?;
        if self.drawn_playable.is_none() {
            return Err(IllegalMoveError::NothingToPass);
        }

        self.last_action = format!("{} kept the drawn card", self.name(player));
        self.advance(Advance::Next);

        Ok(self.snapshot())
    }

    pub fn submit_special_call(&mut self, player: usize) -> Result<GameSnapshot, InvalidCallError> {
        match self.phase {
            Phase::RoundOver { .. } => return Err(InvalidCallError::GameOver),
            Phase::AwaitingColorChoice { .. } => {
                return Err(InvalidCallError::AwaitingColorChoice);
            }
            Phase::AwaitingIntent => {}
        }
        let cards = self
            .players
            .get(player)
            .ok_or(InvalidCallError::NoSuchPlayer(player))?
            .cards_count();
        if cards != 1 {
            return Err(InvalidCallError::HandSize(cards));
        }

        self.uno_obligations[player] = false;
        self.last_action = format!("{} called UNO!", self.name(player));
        info!(player, "UNO called");

        Ok(self.snapshot())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, player)| PlayerView {
                seat,
                id: player.id,
                name: player.name().to_string(),
                is_human: player.is_human(),
                hand: if player.is_human() {
                    HandView::Visible(player.hand.clone())
                } else {
                    HandView::Hidden(player.cards_count())
                },
                uno_pending: self.uno_obligations[seat],
            })
            .collect();

        GameSnapshot {
            players,
            top_card: self.piles.top().clone(),
            direction: self.direction,
            current_player: self.current,
            last_action: self.last_action.clone(),
            draw_pile_count: self.piles.draw_count(),
            discard_pile_count: self.piles.discard_count(),
            active: self.is_active(),
            awaiting_color: self.pending_wild().is_some(),
            winner: self.winner(),
            scores: self.scores(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn get_player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    pub fn current_player(&self) -> usize {
        self.current
    }

    pub fn next_player(&self) -> usize {
        self.direction.seat_after(self.current, 1)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn top_card(&self) -> &PlayedCard {
        self.piles.top()
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::RoundOver { .. })
    }

    pub fn winner(&self) -> Option<usize> {
        match self.phase {
            Phase::RoundOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn pending_wild(&self) -> Option<&Card> {
        match &self.phase {
            Phase::AwaitingColorChoice { pending } => Some(pending),
            _ => None,
        }
    }

    pub fn uno_obligation(&self, seat: usize) -> bool {
        self.uno_obligations.get(seat).copied().unwrap_or(false)
    }

    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    pub fn draw_pile_count(&self) -> usize {
        self.piles.draw_count()
    }

    pub fn discard_pile_count(&self) -> usize {
        self.piles.discard_count()
    }

    pub fn fresh_decks(&self) -> usize {
        self.piles.fresh_decks()
    }

    /// Cards across both piles, every hand and a pending wild.
    pub fn total_cards(&self) -> usize {
        self.piles.draw_count()
            + self.piles.discard_count()
            + self.players.iter().map(Player::cards_count).sum::<usize>()
            + usize::from(self.pending_wild().is_some())
    }

    /// What [`Game::total_cards`] has to add up to.
    pub fn expected_total_cards(&self) -> usize {
        TOTAL_CARDS_IN_DECK as usize * (1 + self.piles.fresh_decks())
    }

    /// Points left in every hand, once the round is over.
    pub fn scores(&self) -> Option<Vec<u32>> {
        self.winner()
            .map(|_| self.players.iter().map(|player| score(&player.hand)).collect())
    }

    fn ensure_turn(&self, player: usize) -> Result<(), IllegalMoveError> {
        match self.phase {
            Phase::RoundOver { .. } => Err(IllegalMoveError::GameOver),
            Phase::AwaitingColorChoice { .. } => Err(IllegalMoveError::AwaitingColorChoice),
            Phase::AwaitingIntent if player != self.current => Err(IllegalMoveError::NotYourTurn {
                player,
                current: self.current,
            }),
            Phase::AwaitingIntent => Ok(()),
        }
    }

    fn resolve_colored(&mut self, color: CardColor, face: ColoredCard) -> Advance {
        let name = self.name(self.current);
        match face {
            ColoredCard::Number(number) => {
                self.last_action = format!("{name} played {color} {number}");
                Advance::Next
            }
            ColoredCard::Skip => {
                let skipped = self.next_player();
                self.last_action =
                    format!("{} played Skip! {} is skipped.", name, self.name(skipped));
                Advance::SkipNext
            }
            ColoredCard::Reverse => {
                self.direction = self.direction.reversed();
                self.last_action = format!("{name} played Reverse! Direction changed.");
                Advance::Next
            }
            ColoredCard::Draw => {
                let victim = self.next_player();
                self.give_cards(victim, DRAW_TWO_PENALTY);
                self.last_action = format!(
                    "{} played Draw Two! {} draws 2 cards and is skipped.",
                    name,
                    self.name(victim)
                );
                Advance::SkipNext
            }
        }
    }

    /// Win check, UNO bookkeeping, then the turn moves on.
    fn finish_turn(&mut self, advance: Advance) {
        let seat = self.current;
        let remaining = self.players[seat].cards_count();

        if remaining == 0 {
            self.end_round(seat);
            return;
        }

        if remaining == 1 {
            if self.players[seat].is_human() {
                self.uno_obligations[seat] = true;
                debug!(player = seat, "UNO call owed");
            } else {
                self.uno_obligations[seat] = false;
                let call = format!(" - {} called UNO!", self.name(seat));
                self.last_action.push_str(&call);
                info!(player = seat, "UNO called");
            }
        }

        self.advance(advance);
    }

    fn advance(&mut self, advance: Advance) {
        self.current = self.direction.seat_after(self.current, advance.steps());
        self.drawn_playable = None;
        debug!(current = self.current, direction = %self.direction, "turn advanced");
    }

    fn give_cards(&mut self, seat: usize, count: usize) {
        let cards = self.piles.draw_cards(count, &mut self.rng);
        self.players[seat].hand.extend(cards);
        self.uno_obligations[seat] = false;
    }

    fn end_round(&mut self, winner: usize) {
        self.phase = Phase::RoundOver { winner };
        self.drawn_playable = None;
        let won = format!(" {} won the round!", self.name(winner));
        self.last_action.push_str(&won);
        info!(winner, scores = ?self.scores(), "round over");
    }

    fn name(&self, seat: usize) -> String {
        self.players[seat].name().to_string()
    }
}
