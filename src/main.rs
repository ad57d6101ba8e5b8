//! Duel Arena - Entry Point
//!
//! Runs a single duel between two archetypes and prints the result.

use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use duel_arena::character::{characters_list, create_character_with, Character};
use duel_arena::combat::{CombatEngine, FightResult, Side};
use duel_arena::core::{GameConfig, Result};
use duel_arena::observer::{ExperienceObserver, ObserverRegistry, XpCalculator};

/// Duel Arena - deterministic one-on-one combat
#[derive(Parser, Debug)]
#[command(name = "duel-arena")]
#[command(about = "Pit two archetypes against each other and report the outcome")]
struct Args {
    /// Archetype that strikes first
    #[arg(long, default_value = "fighter")]
    player: String,

    /// Archetype that responds
    #[arg(long, default_value = "mage")]
    ai: String,

    /// Random seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Round limit before a draw (overrides the config file)
    #[arg(long)]
    max_rounds: Option<u32>,

    /// TOML config file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// List available archetypes and exit
    #[arg(long)]
    list: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct DuelReport<'a> {
    player: &'a str,
    ai: &'a str,
    seed: u64,
    result: &'a FightResult,
    winner: Option<WinnerReport<'a>>,
}

#[derive(Serialize)]
struct WinnerReport<'a> {
    name: &'a str,
    level: u32,
    xp: u32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("duel_arena=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Duel failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    if args.list {
        for name in characters_list() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.combat.seed = seed;
    }
    if let Some(max_rounds) = args.max_rounds {
        config.combat.max_rounds = max_rounds;
    }
    config.validate()?;

    let mut player = create_character_with(&args.player, &config)?;
    let mut ai = create_character_with(&args.ai, &config)?;

    let mut observers = ObserverRegistry::new();
    observers.subscribe(Rc::new(ExperienceObserver::new(XpCalculator::new(
        config.experience.clone(),
    ))));

    let mut engine = CombatEngine::new(&config, observers)?;
    let result = engine.play(&mut player, &mut ai);

    let winner = result.winner().map(|side| match side {
        Side::Player => &player,
        Side::Ai => &ai,
    });

    if args.format == "json" {
        let report = DuelReport {
            player: player.name(),
            ai: ai.name(),
            seed: config.combat.seed,
            result: &result,
            winner: winner.map(|c| WinnerReport {
                name: c.name(),
                level: c.level(),
                xp: c.xp(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&player, &ai, &result, winner);
    }

    Ok(())
}

fn print_text(player: &Character, ai: &Character, result: &FightResult, winner: Option<&Character>) {
    println!("=== {} vs {} ===", player.name(), ai.name());
    println!("Rounds:          {}", result.rounds());
    println!("Damage dealt:    {}", result.damage_dealt());
    println!("Damage received: {}", result.damage_received());
    println!("Exhausted turns: {}", result.exhausted_turns());
    println!(
        "Final health:    {} {} / {} {}",
        player.name(),
        result.health(Side::Player),
        ai.name(),
        result.health(Side::Ai)
    );
    match winner {
        Some(c) => println!("Winner: {} (level {}, {} xp)", c.name(), c.level(), c.xp()),
        None => println!("Draw"),
    }
}
