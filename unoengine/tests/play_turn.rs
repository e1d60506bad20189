use unoengine::{
    autopilot_step,
    card::{Card, CardColor, CardKind, ColoredCard, PlayedCard},
    computer_player_step,
    error::{IllegalMoveError, InvalidCallError, InvalidStateError},
    turn::{Direction, Intent},
    Game, HandView,
};

/// A seeded game where the human seat is up and the top card is a number card
/// satisfying `top`.
fn human_to_play(top: impl Fn(&PlayedCard) -> bool) -> Game {
    (0..)
        .map(|seed| Game::with_seed(seed).unwrap())
        .find(|game| {
            game.current_player() == 0
                && game.top_card().kind() == CardKind::Number
                && top(game.top_card())
        })
        .expect("some seed deals this table")
}

fn top_color(game: &Game) -> CardColor {
    game.top_card().color()
}

fn other_color(color: CardColor) -> CardColor {
    match color {
        CardColor::Red => CardColor::Blue,
        _ => CardColor::Red,
    }
}

#[test]
fn play_turn_works_if_card_playable() {
    let mut uno = human_to_play(|_| true);
    let color = top_color(&uno);

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand[0] = Card::Colored(color, ColoredCard::Number(1));

    let snapshot = uno.submit_play(0, 0).unwrap();

    assert_eq!(
        uno.top_card(),
        &PlayedCard::Colored(color, ColoredCard::Number(1))
    );
    assert_eq!(snapshot.current_player, 1);
    assert_eq!(snapshot.last_action, format!("You played {color} 1"));
    assert_eq!(uno.get_player(0).unwrap().cards_count(), 6);
}

#[test]
fn number_match_scenario() {
    let mut uno = human_to_play(|top| {
        matches!(top, PlayedCard::Colored(CardColor::Red, ColoredCard::Number(5)))
    });

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand[0] = Card::Colored(CardColor::Green, ColoredCard::Number(3));
    player.hand[1] = Card::Colored(CardColor::Blue, ColoredCard::Number(5));

    let error = uno.submit_play(0, 0).unwrap_err();
    assert!(matches!(error, IllegalMoveError::CannotPlay { .. }));

    uno.submit_play(0, 1).unwrap();
    assert_eq!(
        uno.top_card(),
        &PlayedCard::Colored(CardColor::Blue, ColoredCard::Number(5))
    );
}

#[test]
fn play_turn_fails_if_card_not_playable() {
    let mut uno = human_to_play(|_| true);
    let color = other_color(top_color(&uno));
    let PlayedCard::Colored(_, ColoredCard::Number(top_number)) = uno.top_card().clone() else {
        panic!("expected a number card on top");
    };

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand[0] = Card::Colored(color, ColoredCard::Number((top_number + 1) % 10));

    let before = uno.snapshot();
    let error = uno.submit_play(0, 0).unwrap_err();

    assert!(matches!(error, IllegalMoveError::CannotPlay { .. }));
    assert_eq!(uno.snapshot(), before);
}

#[test]
fn play_turn_fails_out_of_turn_or_out_of_range() {
    let mut uno = human_to_play(|_| true);
    let before = uno.snapshot();

    assert_eq!(
        uno.submit_play(2, 0).unwrap_err(),
        IllegalMoveError::NotYourTurn {
            player: 2,
            current: 0
        }
    );
    assert_eq!(
        uno.submit_draw(1).unwrap_err(),
        IllegalMoveError::NotYourTurn {
            player: 1,
            current: 0
        }
    );
    assert_eq!(
        uno.submit_play(0, 7).unwrap_err(),
        IllegalMoveError::NoSuchCard {
            index: 7,
            hand_size: 7
        }
    );
    assert_eq!(uno.snapshot(), before);
}

#[test]
fn play_turn_skips_player_properly() {
    let mut uno = human_to_play(|top| top.color() == CardColor::Yellow);

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand[0] = Card::Colored(CardColor::Yellow, ColoredCard::Skip);

    let snapshot = uno.submit_play(0, 0).unwrap();

    assert_eq!(snapshot.current_player, 2);
    assert_eq!(snapshot.last_action, "You played Skip! Player 2 is skipped.");
    assert!(matches!(
        uno.top_card(),
        PlayedCard::Colored(CardColor::Yellow, ColoredCard::Skip)
    ));
}

#[test]
fn play_turn_performs_reverse_properly() {
    let mut uno = human_to_play(|_| true);
    let color = top_color(&uno);

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand[0] = Card::Colored(color, ColoredCard::Reverse);

    let snapshot = uno.submit_play(0, 0).unwrap();

    assert_eq!(snapshot.direction, Direction::CounterClockwise);
    assert_eq!(snapshot.current_player, 3);
    assert_eq!(uno.next_player(), 2);
}

#[test]
fn play_turn_performs_draw_properly() {
    let mut uno = human_to_play(|_| true);
    let color = top_color(&uno);

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand[0] = Card::Colored(color, ColoredCard::Draw);

    let snapshot = uno.submit_play(0, 0).unwrap();

    assert_eq!(snapshot.current_player, 2);
    assert_eq!(snapshot.players[1].hand, HandView::Hidden(9));
    assert_eq!(
        snapshot.last_action,
        "You played Draw Two! Player 2 draws 2 cards and is skipped."
    );
}

#[test]
fn play_turn_performs_wild_properly() {
    let mut uno = human_to_play(|_| true);

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand[0] = Card::Wild;

    let snapshot = uno.submit_play(0, 0).unwrap();
    assert!(snapshot.awaiting_color);
    assert_eq!(snapshot.current_player, 0);

    let snapshot = uno.submit_color_choice(CardColor::Green).unwrap();
    assert!(!snapshot.awaiting_color);
    assert_eq!(snapshot.top_card, PlayedCard::Wild(CardColor::Green));
    assert_eq!(snapshot.top_card.color(), CardColor::Green);
    assert_eq!(snapshot.current_player, 1);
    assert_eq!(snapshot.last_action, "You played Wild! Color is now Green.");

    // Green now follows, whatever the previous top card was.
    let player = uno.get_player_mut(1).expect("Seat 1 must exist.");
    player.hand[0] = Card::Colored(CardColor::Green, ColoredCard::Number(2));
    uno.submit_play(1, 0).unwrap();

    assert_eq!(
        uno.top_card(),
        &PlayedCard::Colored(CardColor::Green, ColoredCard::Number(2))
    );
}

#[test]
fn play_turn_performs_wild_draw_properly() {
    let mut uno = human_to_play(|_| true);

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand[0] = Card::WildDraw;

    uno.submit_play(0, 0).unwrap();
    let snapshot = uno.submit_color_choice(CardColor::Yellow).unwrap();

    assert_eq!(snapshot.top_card, PlayedCard::WildDraw(CardColor::Yellow));
    assert_eq!(snapshot.current_player, 2);
    assert_eq!(snapshot.players[1].hand.len(), 11);
}

#[test]
fn color_choice_outside_wild_is_invalid_state() {
    let mut uno = human_to_play(|_| true);
    let before = uno.snapshot();

    assert_eq!(
        uno.submit_color_choice(CardColor::Red).unwrap_err(),
        InvalidStateError::NoPendingWild
    );
    assert_eq!(uno.snapshot(), before);
}

#[test]
fn turn_draw_adds_one_card() {
    let mut uno = human_to_play(|_| true);
    let before = uno.draw_pile_count();

    let snapshot = uno.submit_draw(0).unwrap();

    assert_eq!(snapshot.human_hand().len(), 8);
    assert_eq!(snapshot.draw_pile_count, before - 1);
    assert_eq!(snapshot.last_action, "You drew a card");
    assert_eq!(uno.total_cards(), 108);
}

#[test]
fn uno_call_waits_for_wild_color() {
    let mut uno = human_to_play(|_| true);

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand.truncate(2);
    player.hand[0] = Card::Wild;

    uno.submit_play(0, 0).unwrap();
    let pending = uno.snapshot();
    assert_eq!(
        uno.submit_special_call(0).unwrap_err(),
        InvalidCallError::AwaitingColorChoice
    );
    assert_eq!(uno.snapshot(), pending);

    uno.submit_color_choice(CardColor::Blue).unwrap();
    assert!(uno.uno_obligation(0));
    let snapshot = uno.submit_special_call(0).unwrap();
    assert!(!snapshot.players[0].uno_pending);
    assert_eq!(snapshot.last_action, "You called UNO!");
}

#[test]
fn turn_uno_works_if_only_one_card() {
    let mut uno = human_to_play(|_| true);
    let color = top_color(&uno);

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand.truncate(2);
    player.hand[0] = Card::Colored(color, ColoredCard::Number(8));

    assert_eq!(
        uno.submit_special_call(0).unwrap_err(),
        InvalidCallError::HandSize(2)
    );

    let snapshot = uno.submit_play(0, 0).unwrap();
    assert!(uno.uno_obligation(0));
    assert!(snapshot.players[0].uno_pending);
    assert_eq!(snapshot.current_player, 1);

    let snapshot = uno.submit_special_call(0).unwrap();
    assert!(!uno.uno_obligation(0));
    assert!(!snapshot.players[0].uno_pending);
    assert_eq!(snapshot.last_action, "You called UNO!");
}

#[test]
fn turn_uno_does_not_work_if_more_than_one_card() {
    let mut uno = human_to_play(|_| true);

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand.truncate(4);

    assert_eq!(
        uno.submit_special_call(0).unwrap_err(),
        InvalidCallError::HandSize(4)
    );
    assert_eq!(
        uno.submit_special_call(9).unwrap_err(),
        InvalidCallError::NoSuchPlayer(9)
    );
}

#[test]
fn turn_winning_works_properly() {
    let mut uno = human_to_play(|_| true);
    let color = top_color(&uno);

    let player = uno.get_player_mut(0).expect("Human seat must exist.");
    player.hand.truncate(0);
    player.add_card(Card::Colored(color, ColoredCard::Skip));
    let skip_index = player
        .card_index(&Card::Colored(color, ColoredCard::Skip))
        .unwrap();

    let snapshot = uno.submit_play(0, skip_index).unwrap();

    assert_eq!(uno.get_player(0).unwrap().cards_count(), 0);
    assert!(!snapshot.active);
    assert_eq!(snapshot.winner, Some(0));
    assert_eq!(snapshot.scores.as_ref().unwrap()[0], 0);
    assert!(snapshot.last_action.ends_with("You won the round!"));

    // Nothing moves once the round is over.
    let frozen = uno.snapshot();
    assert_eq!(uno.submit_play(0, 0).unwrap_err(), IllegalMoveError::GameOver);
    assert_eq!(uno.submit_draw(0).unwrap_err(), IllegalMoveError::GameOver);
    assert_eq!(uno.submit_pass(0).unwrap_err(), IllegalMoveError::GameOver);
    assert_eq!(
        uno.submit_color_choice(CardColor::Red).unwrap_err(),
        InvalidStateError::GameOver
    );
    assert_eq!(
        uno.submit_special_call(1).unwrap_err(),
        InvalidCallError::GameOver
    );
    assert_eq!(computer_player_step(&mut uno), None);
    assert_eq!(autopilot_step(&mut uno), None);
    assert_eq!(uno.snapshot(), frozen);
}

#[test]
fn snapshot_hides_computer_hands() {
    let uno = Game::with_seed(5).unwrap();
    let snapshot = uno.snapshot();

    assert_eq!(snapshot.players.len(), 4);
    assert!(matches!(snapshot.players[0].hand, HandView::Visible(ref cards) if cards.len() == 7));
    for view in &snapshot.players[1..] {
        assert!(matches!(view.hand, HandView::Hidden(_)));
        assert!(!view.is_human);
    }
    assert_eq!(snapshot.human_hand(), uno.get_player(0).unwrap().hand.as_slice());
    assert_eq!(
        snapshot.draw_pile_count
            + snapshot.discard_pile_count
            + snapshot
                .players
                .iter()
                .map(|p| p.hand.len())
                .sum::<usize>(),
        108
    );
}

#[test]
fn full_matches_conserve_cards_and_finish() {
    for seed in 0..8 {
        let mut uno = Game::with_seed(seed).unwrap();
        let mut steps = 0;

        while let Some(intent) = autopilot_step(&mut uno) {
            let before = uno.current_player();
            let direction = uno.direction();
            let played_number = match &intent {
                Intent::Play { player, card_index } => {
                    uno.get_player(*player).unwrap().hand[*card_index].kind() == CardKind::Number
                }
                _ => false,
            };

            let snapshot = uno.submit(intent).unwrap();

            assert_eq!(uno.total_cards(), uno.expected_total_cards());
            if played_number && snapshot.active {
                assert_eq!(snapshot.current_player, direction.seat_after(before, 1));
            }

            steps += 1;
            assert!(steps < 20_000, "seed {seed} never finished");
        }

        assert!(!uno.is_active());
        let winner = uno.winner().unwrap();
        assert_eq!(uno.get_player(winner).unwrap().cards_count(), 0);
        let scores = uno.scores().unwrap();
        assert_eq!(scores[winner], 0);
    }
}

#[test]
fn computer_seats_drive_themselves_until_the_human_is_up() {
    let mut uno = Game::with_seed(77).unwrap();
    let mut steps = 0;

    while uno.is_active() && uno.current_player() != 0 {
        let intent = computer_player_step(&mut uno).expect("computer seat is up");
        uno.submit(intent).unwrap();
        steps += 1;
        assert!(steps < 1_000);
    }

    if uno.is_active() {
        assert_eq!(computer_player_step(&mut uno), None);
    }
}
