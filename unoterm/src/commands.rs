use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;
use unoengine::{constants::HUMAN_SEAT, CardColor, Intent};

#[derive(Debug, Clone, Copy, Display, EnumString, EnumIter, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum CommandKind {
    #[strum(to_string = "play", serialize = "p")]
    Play,
    #[strum(to_string = "draw", serialize = "d")]
    Draw,
    Pass,
    #[strum(to_string = "uno", serialize = "u")]
    Uno,
    #[strum(to_string = "color", serialize = "c")]
    Color,
    #[strum(to_string = "help", serialize = "h")]
    Help,
    #[strum(to_string = "quit", serialize = "q")]
    Quit,
}

impl CommandKind {
    fn usage(&self) -> &'static str {
        match self {
            CommandKind::Play => "play <n>     play the n-th card of your hand",
            CommandKind::Draw => "draw         draw a card",
            CommandKind::Pass => "pass         keep the card you just drew",
            CommandKind::Uno => "uno          call UNO with one card left",
            CommandKind::Color => "color <name> pick red, blue, green or yellow for your wild",
            CommandKind::Help => "help         show this list",
            CommandKind::Quit => "quit         leave the table",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Nothing entered, type `help` for the command list")]
    Empty,
    #[error("Unknown command `{0}`, type `help` for the command list")]
    Unknown(String),
    #[error("`{0}` needs {1}")]
    MissingArgument(CommandKind, &'static str),
    #[error("`{0}` is not a card number from your hand")]
    BadCardNumber(String),
    #[error("`{0}` is not a color")]
    BadColor(String),
}

/// Parses one line typed by the human seat. Card numbers are shown starting at 1.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let name = words.next().ok_or(CommandError::Empty)?;
    let kind = CommandKind::from_str(&name.to_ascii_lowercase())
        .map_err(|_| CommandError::Unknown(name.to_string()))?;
    let player = HUMAN_SEAT;

    let command = match kind {
        CommandKind::Play => {
            let number = words
                .next()
                .ok_or(CommandError::MissingArgument(kind, "a card number"))?;
            let card_index = number
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| CommandError::BadCardNumber(number.to_string()))?;
            Command::Intent(Intent::Play { player, card_index })
        }
        CommandKind::Draw => Command::Intent(Intent::Draw { player }),
        CommandKind::Pass => Command::Intent(Intent::Pass { player }),
        CommandKind::Uno => Command::Intent(Intent::SpecialCall { player }),
        CommandKind::Color => {
            let name = words
                .next()
                .ok_or(CommandError::MissingArgument(kind, "a color"))?;
            let color = CardColor::from_str(name)
                .map_err(|_| CommandError::BadColor(name.to_string()))?;
            Command::Intent(Intent::ChooseColor(color))
        }
        CommandKind::Help => Command::Help,
        CommandKind::Quit => Command::Quit,
    };

    Ok(command)
}

pub fn help() -> String {
    CommandKind::iter()
        .map(|kind| format!("  {}", kind.usage()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_uses_one_based_card_numbers() {
        assert_eq!(
            parse("play 3"),
            Ok(Command::Intent(Intent::Play {
                player: 0,
                card_index: 2
            }))
        );
        assert_eq!(
            parse("P 1"),
            Ok(Command::Intent(Intent::Play {
                player: 0,
                card_index: 0
            }))
        );
        assert_eq!(parse("play 0"), Err(CommandError::BadCardNumber("0".to_string())));
        assert_eq!(
            parse("play"),
            Err(CommandError::MissingArgument(CommandKind::Play, "a card number"))
        );
    }

    #[test]
    fn color_names_are_case_insensitive() {
        assert_eq!(
            parse("color Green"),
            Ok(Command::Intent(Intent::ChooseColor(CardColor::Green)))
        );
        assert_eq!(
            parse("c yellow"),
            Ok(Command::Intent(Intent::ChooseColor(CardColor::Yellow)))
        );
        assert_eq!(parse("c purple"), Err(CommandError::BadColor("purple".to_string())));
    }

    #[test]
    fn short_and_long_forms() {
        assert_eq!(parse("d"), Ok(Command::Intent(Intent::Draw { player: 0 })));
        assert_eq!(parse("uno"), Ok(Command::Intent(Intent::SpecialCall { player: 0 })));
        assert_eq!(parse("pass"), Ok(Command::Intent(Intent::Pass { player: 0 })));
        assert_eq!(parse("q"), Ok(Command::Quit));
        assert_eq!(parse("  "), Err(CommandError::Empty));
        assert_eq!(parse("jump"), Err(CommandError::Unknown("jump".to_string())));
    }

    #[test]
    fn help_lists_every_command() {
        assert_eq!(help().lines().count(), 7);
    }
}
