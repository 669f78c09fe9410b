//! Simulate CLI — play a full game from the command line.
//!
//! Usage:
//!   cargo run --bin simulate -- --players Ada,Bo,Cy --seed 7
//!   cargo run --bin simulate -- --variant-file my_board.toml --max-turns 500

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ladder_race::board::VariantConfig;
use ladder_race::engine::{GameBuilder, TurnOutcome};
use ladder_race::events::GameEvent;
use ladder_race::save::SaveGame;

#[derive(Parser)]
#[command(name = "simulate", about = "Play a ladder race game to completion")]
struct Cli {
    /// Comma-separated player names, in turn order
    #[arg(long, value_delimiter = ',', default_value = "Red,Blue")]
    players: Vec<String>,

    /// Dice seed
    #[arg(long, default_value = "42", env = "LADDER_RACE_SEED")]
    seed: u64,

    /// Built-in variant: "classic" or "short"
    #[arg(long, default_value = "classic")]
    variant: String,

    /// Load the board from a TOML file instead of a built-in variant
    #[arg(long)]
    variant_file: Option<PathBuf>,

    /// Stop after this many turns even without a winner
    #[arg(long, default_value = "1000")]
    max_turns: u32,

    /// Print the final save as JSON
    #[arg(long)]
    dump_save: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    let variant = match &cli.variant_file {
        Some(path) => VariantConfig::load(path)?,
        None => VariantConfig::by_name(&cli.variant)?,
    };

    let mut builder = GameBuilder::new().variant(variant).seed(cli.seed);
    for (i, name) in cli.players.iter().enumerate() {
        builder = builder.player(name.trim(), format!("token-{}", i + 1));
    }
    let mut game = builder.build()?;

    tracing::info!(
        players = game.player_count(),
        seed = cli.seed,
        tiles = game.board().len(),
        "starting game"
    );

    let names: Vec<String> = game
        .players()
        .iter()
        .map(|(_, p)| p.name().to_string())
        .collect();

    for _ in 0..cli.max_turns {
        let report = game.take_turn()?;
        for event in &report.events {
            if matches!(
                event,
                GameEvent::TurnCompleted { .. } | GameEvent::CurrentPlayerChanged { .. }
            ) {
                continue;
            }
            println!("[turn {:>4}] {:<8} {}", report.turn, names[event.player().index()], event);
        }
        if report.outcome == TurnOutcome::Won {
            break;
        }
    }

    match game.winner() {
        Some(winner) => println!(
            "{} wins after {} turns",
            names[winner.index()],
            game.turn_number()
        ),
        None => println!("no winner after {} turns", cli.max_turns),
    }

    if cli.dump_save {
        println!("{}", SaveGame::capture(&game)?.to_json()?);
    }

    Ok(())
}
