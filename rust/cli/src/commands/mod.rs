//! Command handler modules for the Le Her CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed as parameters so tests can
//!   capture output
//! - All errors propagated via the `CliError` enum

pub mod sim;
pub mod stats;
pub mod tournament;

pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
pub use tournament::handle_tournament_command;
