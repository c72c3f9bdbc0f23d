//! Command-line argument definitions for the `leher` binary.
//!
//! Parsing is kept separate from the handlers so tests can exercise argument
//! validation without touching the filesystem or the engine.

use clap::{Parser, Subcommand};

/// Top-level argument parser for the `leher` binary.
#[derive(Parser, Debug)]
#[command(name = "leher", version, about = "Le Her simulation engine")]
pub struct LeherCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run N automated games and append results to a JSONL log
    Sim {
        /// Number of games to simulate
        #[arg(long)]
        games: u64,
        /// Path of the JSONL log to append to (omit to skip logging)
        #[arg(long)]
        output: Option<String>,
        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Turns per game
        #[arg(long, default_value_t = 13)]
        turns: usize,
        /// Draw without replacement from a shuffled finite deck
        #[arg(long)]
        remove_drawn: bool,
        /// Log final hands, histories and the deck alongside the scores
        #[arg(long)]
        log_all: bool,
        /// Player strategy name (keepN)
        #[arg(long, default_value = "keep8")]
        player_strategy: String,
        /// Dealer strategy name (keepN)
        #[arg(long, default_value = "keep8")]
        dealer_strategy: String,
        /// Suppress per-percent progress output
        #[arg(long)]
        quiet: bool,
    },
    /// Aggregate statistics from a JSONL game log
    Stats {
        /// Path of the JSONL log to read
        #[arg(long)]
        input: String,
    },
    /// Cross every player threshold with every dealer threshold
    Tournament {
        /// Comma-separated keep thresholds for the player
        #[arg(long, value_delimiter = ',')]
        player_thresholds: Vec<u32>,
        /// Comma-separated keep thresholds for the dealer
        #[arg(long, value_delimiter = ',')]
        dealer_thresholds: Vec<u32>,
        /// Games per strategy pairing
        #[arg(long)]
        games: u64,
        /// Directory receiving per-pairing logs and results.txt
        #[arg(long)]
        outdir: String,
        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Draw without replacement from a shuffled finite deck
        #[arg(long)]
        remove_drawn: bool,
    },
}
