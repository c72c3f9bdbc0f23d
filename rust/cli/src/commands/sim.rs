//! Simulation command handler: the batch runner driving automated games.

use crate::error::CliError;
use crate::ui;
use leher_engine::engine::{Engine, EngineConfig};
use leher_engine::logger::{GameLogger, GameRecord};
use leher_strategy::create_strategy;
use std::io::Write;

/// Win/draw/loss tally for one batch of games.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchTally {
    pub games: usize,
    pub player_wins: usize,
    pub dealer_wins: usize,
    pub draws: usize,
}

impl BatchTally {
    pub fn player_win_rate(&self) -> f64 {
        self.player_wins as f64 / self.games as f64
    }

    pub fn dealer_win_rate(&self) -> f64 {
        self.dealer_wins as f64 / self.games as f64
    }

    pub fn draw_rate(&self) -> f64 {
        self.draws as f64 / self.games as f64
    }
}

/// Knobs for one batch run, shared by the sim and tournament commands.
pub struct BatchOptions {
    pub games: usize,
    pub output: Option<String>,
    pub seed: Option<u64>,
    pub turns: usize,
    pub remove_drawn: bool,
    pub log_all: bool,
    pub player_strategy: String,
    pub dealer_strategy: String,
    pub quiet: bool,
}

/// Handle the sim command: drive the engine through N automated games,
/// appending one record per game when an output path is given and printing
/// a progress line at each whole percent of the batch.
///
/// # Arguments
///
/// * `options` - batch configuration from the parsed command line
/// * `out` - output stream for progress and the final summary
/// * `err` - output stream for error messages
pub fn handle_sim_command(
    options: BatchOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if options.games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let tally = run_batch(&options, out)?;
    writeln!(
        out,
        "Games: {}  Player wins: {}  Dealer wins: {}  Draws: {}",
        tally.games, tally.player_wins, tally.dealer_wins, tally.draws
    )?;
    Ok(())
}

/// Runs one batch to completion. Factored out so the tournament command can
/// reuse the exact per-game loop with its own logging destinations.
pub fn run_batch(options: &BatchOptions, out: &mut dyn Write) -> Result<BatchTally, CliError> {
    let player = create_strategy(&options.player_strategy)?;
    let dealer = create_strategy(&options.dealer_strategy)?;

    let config = EngineConfig {
        turns_per_game: options.turns,
        seed: options.seed,
        ..Default::default()
    };
    let mut engine = Engine::new(config, player, dealer);

    let mut logger = match &options.output {
        Some(path) => Some(GameLogger::open(path)?),
        None => None,
    };

    let mut tally = BatchTally::default();
    let mut last_percent = 0;

    for _ in 0..options.games {
        engine.reset(options.remove_drawn, None)?;
        let summary = engine.run_automated_game()?;

        tally.games += 1;
        match summary.player_score.cmp(&summary.dealer_score) {
            std::cmp::Ordering::Greater => tally.player_wins += 1,
            std::cmp::Ordering::Less => tally.dealer_wins += 1,
            std::cmp::Ordering::Equal => tally.draws += 1,
        }

        if let Some(logger) = logger.as_mut() {
            let record = GameRecord {
                id: 0,
                player_score: Some(summary.player_score),
                dealer_score: Some(summary.dealer_score),
                player_cards: options.log_all.then(|| summary.player_cards.clone()),
                dealer_cards: options.log_all.then(|| summary.dealer_cards.clone()),
                player_history: options.log_all.then(|| summary.player_history.clone()),
                dealer_history: options.log_all.then(|| summary.dealer_history.clone()),
                deck: options.log_all.then(|| summary.deck_log.clone()),
                ts: None,
            };
            logger.append(record)?;
        }

        let percent = tally.games * 100 / options.games;
        if !options.quiet && percent > last_percent {
            last_percent = percent;
            ui::write_progress(out, tally.games, options.games)?;
        }
    }

    Ok(tally)
}
