//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::StrategyKind;

/// Tic-tac-toe against five strategies of increasing strength
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against classic AI strategies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with default strategy, seed and game count
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the strategies by difficulty
    Strategies,

    /// Play an interactive game against a strategy
    Play {
        /// Strategy id (random, goal, utility, minimax, alphabeta)
        #[arg(short, long, value_parser = parse_strategy)]
        strategy: Option<StrategyKind>,

        /// Let the strategy open as X
        #[arg(long)]
        ai_first: bool,

        /// RNG seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two strategies against each other
    Duel {
        /// Strategy playing X
        #[arg(short, long, value_parser = parse_strategy)]
        x: StrategyKind,

        /// Strategy playing O
        #[arg(short, long, value_parser = parse_strategy)]
        o: StrategyKind,

        /// Number of games
        #[arg(short, long)]
        games: Option<u32>,

        /// RNG seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Answer one JSON decision request from stdin
    Decide {
        /// RNG seed for the random strategies
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_strategy(id: &str) -> Result<StrategyKind, tictactoe_engine::EngineError> {
    StrategyKind::from_id(id)
}
