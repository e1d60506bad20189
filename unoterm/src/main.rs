mod commands;
mod render;

use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use clap::Parser;
use color_eyre::Result;
use commands::Command;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use unoengine::{
    autopilot_step, computer_player_step,
    constants::{HUMAN_SEAT, PLAYER_COUNT},
    Game,
};

/// Four seat UNO in the terminal: you against three computer players.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Seed for shuffling and computer decisions; round n uses seed + n - 1
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer play your seat too
    #[arg(long)]
    autoplay: bool,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Number of rounds to play; scores add up across rounds
    #[arg(long, default_value_t = 1)]
    rounds: u32,
}

enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let delay = Duration::from_millis(
        args.delay_ms
            .unwrap_or(if args.autoplay { 0 } else { 600 }),
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut totals = [0u32; PLAYER_COUNT];

    for round in 1..=args.rounds {
        let mut game = match args.seed {
            Some(seed) => Game::with_seed(seed.wrapping_add(u64::from(round - 1)))?,
            None => Game::new()?,
        };
        info!(round, "round started");
        println!("\n=== Round {round} ===");
        println!("{}", render::table(&game.snapshot()));

        if let Flow::Quit = play_round(&mut game, &args, delay, &mut input)? {
            println!("Bye!");
            return Ok(());
        }

        let snapshot = game.snapshot();
        if let Some(points) = &snapshot.scores {
            for (total, round_points) in totals.iter_mut().zip(points) {
                *total += round_points;
            }
        }
        println!("{}", render::scores(&snapshot, &totals));
    }

    Ok(())
}

fn play_round(
    game: &mut Game,
    args: &Args,
    delay: Duration,
    input: &mut impl BufRead,
) -> Result<Flow> {
    let mut uno_offered = false;

    while game.is_active() {
        let owes_uno = game.uno_obligation(HUMAN_SEAT);
        if !owes_uno {
            uno_offered = false;
        }
        let human_turn = game.current_player() == HUMAN_SEAT;

        let (intent, typed) = if args.autoplay {
            (autopilot_step(game), false)
        } else if human_turn || (owes_uno && !uno_offered) {
            uno_offered |= owes_uno;
            match prompt(owes_uno, input)? {
                Some(Command::Intent(intent)) => (Some(intent), true),
                Some(Command::Help) => {
                    println!("{}", commands::help());
                    continue;
                }
                Some(Command::Quit) => return Ok(Flow::Quit),
                None => continue,
            }
        } else {
            (computer_player_step(game), false)
        };

        let Some(intent) = intent else {
            warn!(current = game.current_player(), "no move available");
            break;
        };

        if !typed {
            thread::sleep(delay);
        }

        match game.submit(intent) {
            Ok(snapshot) => println!("\n{}", render::table(&snapshot)),
            Err(error) => println!("{error}"),
        }
    }

    Ok(Flow::Continue)
}

/// Reads one command. `None` for a blank or unreadable line.
fn prompt(owes_uno: bool, input: &mut impl BufRead) -> Result<Option<Command>> {
    if owes_uno {
        print!("One card left! Type `uno` to call it (enter to carry on) > ");
    } else {
        print!("Your move (`help` for commands) > ");
    }
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Some(Command::Quit));
    }
    if line.trim().is_empty() {
        return Ok(None);
    }

    match commands::parse(&line) {
        Ok(command) => Ok(Some(command)),
        Err(error) => {
            println!("{error}");
            Ok(None)
        }
    }
}
