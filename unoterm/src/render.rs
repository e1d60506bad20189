use unoengine::{Card, CardColor, GameSnapshot, HandView, PlayedCard};

trait AsEmoji {
    fn as_emoji(&self) -> &'static str;
}

impl AsEmoji for CardColor {
    fn as_emoji(&self) -> &'static str {
        match self {
            CardColor::Red => "🟥",
            CardColor::Green => "🟩",
            CardColor::Blue => "🟦",
            CardColor::Yellow => "🟨",
        }
    }
}

impl AsEmoji for Card {
    fn as_emoji(&self) -> &'static str {
        match self.color() {
            Some(color) => color.as_emoji(),
            None => "⬛",
        }
    }
}

impl AsEmoji for PlayedCard {
    fn as_emoji(&self) -> &'static str {
        self.color().as_emoji()
    }
}

/// The table as the human seat sees it.
pub fn table(snapshot: &GameSnapshot) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Top card: {} {}   Draw pile: {}   {}",
        snapshot.top_card.as_emoji(),
        snapshot.top_card,
        snapshot.draw_pile_count,
        snapshot.direction
    ));

    for player in &snapshot.players {
        let marker = if player.seat == snapshot.current_player {
            ">"
        } else {
            " "
        };
        let uno = if player.uno_pending { "  (UNO owed!)" } else { "" };
        let count = player.hand.len();
        let cards = if count == 1 { "card" } else { "cards" };
        lines.push(format!("{marker} {:<9} {count} {cards}{uno}", player.name));
    }

    if let Some(hand) = snapshot.players.iter().find_map(|player| match &player.hand {
        HandView::Visible(cards) => Some(cards),
        HandView::Hidden(_) => None,
    }) {
        lines.push(hand_line(hand));
    }

    lines.push(snapshot.last_action.clone());
    lines.join("\n")
}

fn hand_line(hand: &[Card]) -> String {
    let cards = hand
        .iter()
        .enumerate()
        .map(|(index, card)| format!("[{}] {} {}", index + 1, card.as_emoji(), card))
        .collect::<Vec<_>>()
        .join("  ");
    format!("Your hand: {cards}")
}

pub fn scores(snapshot: &GameSnapshot, totals: &[u32]) -> String {
    let Some(points) = &snapshot.scores else {
        return String::new();
    };

    let mut lines = vec!["Final scores:".to_string()];
    for (player, (round, total)) in snapshot.players.iter().zip(points.iter().zip(totals)) {
        let winner = if snapshot.winner == Some(player.seat) {
            " (winner)"
        } else {
            ""
        };
        lines.push(format!(
            "  {:<9} {round:>4} points  {total:>5} total{winner}",
            player.name
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use unoengine::Game;

    #[test]
    fn table_shows_only_the_human_hand() {
        let game = Game::with_seed(3).unwrap();
        let snapshot = game.snapshot();
        let rendered = table(&snapshot);

        assert!(rendered.contains("Your hand: [1]"));
        assert!(rendered.contains("[7]"));
        assert!(!rendered.contains("[8]"));
        assert!(rendered.contains("Player 4"));
        assert!(rendered.ends_with(&snapshot.last_action));
    }

    #[test]
    fn hand_line_numbers_from_one() {
        let line = hand_line(&[
            Card::Wild,
            Card::Colored(CardColor::Red, unoengine::ColoredCard::Skip),
        ]);
        assert_eq!(line, "Your hand: [1] ⬛ Wild  [2] 🟥 Red Skip");
    }

    #[test]
    fn no_scores_while_playing() {
        let game = Game::with_seed(3).unwrap();
        assert_eq!(scores(&game.snapshot(), &[0, 0, 0, 0]), "");
    }
}
