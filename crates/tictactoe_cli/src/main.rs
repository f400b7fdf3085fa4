//! Tic-tac-toe - command-line front end
//!
//! Interactive play, strategy duels and one-shot JSON decisions on top of
//! `tictactoe_engine`.

#![warn(missing_docs)]

mod cli;
mod config;
mod decide;
mod duel;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::CliConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Read;
use tictactoe_engine::{StrategyKind, catalog};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Strategies => list_strategies(),
        Command::Play {
            strategy,
            ai_first,
            seed,
        } => run_play(
            strategy.unwrap_or(*config.strategy()),
            ai_first || *config.ai_first(),
            seed.or(*config.seed()),
        ),
        Command::Duel { x, o, games, seed } => run_duel(
            x,
            o,
            games.unwrap_or(*config.games()),
            seed.or(*config.seed()),
        ),
        Command::Decide { seed } => run_decide(seed.or(*config.seed())),
    }
}

/// Logs go to stderr so stdout stays clean for `decide`.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn list_strategies() -> Result<()> {
    for info in catalog() {
        println!("{:<10} {:<14} difficulty {}", info.id, info.name, info.difficulty);
    }
    Ok(())
}

#[instrument]
fn run_play(strategy: StrategyKind, ai_first: bool, seed: Option<u64>) -> Result<()> {
    info!("Starting interactive game");
    let mut rng = make_rng(seed);
    let stdin = std::io::stdin();
    play::run(strategy, ai_first, &mut rng, stdin.lock(), std::io::stdout())?;
    Ok(())
}

#[instrument]
fn run_duel(x: StrategyKind, o: StrategyKind, games: u32, seed: Option<u64>) -> Result<()> {
    let mut rng = make_rng(seed);
    let tally = duel::run(x, o, games, &mut rng)?;
    println!("{} (X) vs {} (O) over {} games", x.name(), o.name(), games);
    println!("{}", tally);
    Ok(())
}

#[instrument]
fn run_decide(seed: Option<u64>) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read request from stdin")?;
    let mut rng = make_rng(seed);
    println!("{}", decide::answer(&input, &mut rng)?);
    Ok(())
}
