//! # Le Her CLI Library
//!
//! Command-line interface for the Le Her simulation engine. Exposes
//! subcommands for running batches of automated games, aggregating their
//! JSONL logs, and crossing threshold strategies in a tournament.
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["leher", "sim", "--games", "100", "--seed", "42"];
//! let code = leher_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: run N automated games, optionally logging each to JSONL
//! - `stats`: aggregate a JSONL game log into a JSON summary
//! - `tournament`: run one batch per player/dealer threshold pairing and
//!   tabulate win/draw rates

use std::io::Write;

pub mod cli;
pub mod commands;
mod error;
pub mod exit_code;
pub mod ui;

use clap::Parser;
use cli::{Commands, LeherCli};
use commands::sim::BatchOptions;
use commands::{handle_sim_command, handle_stats_command, handle_tournament_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - output stream for normal output (typically `stdout`)
/// * `err` - output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match LeherCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            // Help and version print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Sim {
            games,
            output,
            seed,
            turns,
            remove_drawn,
            log_all,
            player_strategy,
            dealer_strategy,
            quiet,
        } => handle_sim_command(
            BatchOptions {
                games: games as usize,
                output,
                seed,
                turns,
                remove_drawn,
                log_all,
                player_strategy,
                dealer_strategy,
                quiet,
            },
            out,
            err,
        ),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Tournament {
            player_thresholds,
            dealer_thresholds,
            games,
            outdir,
            seed,
            remove_drawn,
        } => handle_tournament_command(
            player_thresholds,
            dealer_thresholds,
            games,
            outdir,
            seed,
            remove_drawn,
            out,
            err,
        ),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_prints_to_stdout_and_exits_zero() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["leher", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("sim"));
    }

    #[test]
    fn unknown_command_exits_two() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["leher", "shuffle"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        assert!(!err.is_empty());
    }

    #[test]
    fn sim_dispatch_runs_games() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            ["leher", "sim", "--games", "2", "--seed", "42", "--quiet"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("Games: 2"));
    }

    #[test]
    fn handler_errors_map_to_exit_two() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            ["leher", "stats", "--input", "nonexistent.jsonl"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::ERROR);
        assert!(String::from_utf8(err).unwrap().contains("Error:"));
    }
}
