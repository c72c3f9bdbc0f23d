//! Stats command handler: aggregate a JSONL game log into a summary.

use crate::error::CliError;
use crate::ui;
use leher_engine::logger::GameRecord;
use serde::Serialize;
use std::io::Write;

/// Aggregated view of one game log, printed as JSON.
#[derive(Debug, Default, Serialize)]
pub struct StatsSummary {
    pub games: usize,
    pub player_wins: usize,
    pub dealer_wins: usize,
    pub draws: usize,
    pub player_win_rate: f64,
    pub dealer_win_rate: f64,
    pub draw_rate: f64,
    pub mean_player_score: f64,
    pub mean_dealer_score: f64,
    /// Lines that failed to parse; counted and skipped, never fatal
    pub corrupted_lines: usize,
}

/// Handle the stats command: replay a JSONL destination and print a JSON
/// summary of wins, draws and mean scores.
///
/// Corrupted lines and records without scores are tolerated; only a missing
/// or unreadable input file is an error.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let contents = match std::fs::read_to_string(&input) {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("cannot read {}: {}", input, e))?;
            return Err(CliError::Io(e));
        }
    };

    let summary = summarize(&contents);
    if summary.corrupted_lines > 0 {
        writeln!(
            err,
            "Warning: {} corrupted line(s) skipped",
            summary.corrupted_lines
        )?;
    }
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?
    )?;
    Ok(())
}

fn summarize(contents: &str) -> StatsSummary {
    let mut summary = StatsSummary::default();
    let mut score_sum = (0u64, 0u64);
    let mut scored = 0usize;

    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        let record: GameRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(_) => {
                summary.corrupted_lines += 1;
                continue;
            }
        };
        summary.games += 1;
        let (Some(player), Some(dealer)) = (record.player_score, record.dealer_score) else {
            continue;
        };
        scored += 1;
        score_sum.0 += u64::from(player);
        score_sum.1 += u64::from(dealer);
        match player.cmp(&dealer) {
            std::cmp::Ordering::Greater => summary.player_wins += 1,
            std::cmp::Ordering::Less => summary.dealer_wins += 1,
            std::cmp::Ordering::Equal => summary.draws += 1,
        }
    }

    if scored > 0 {
        summary.player_win_rate = summary.player_wins as f64 / scored as f64;
        summary.dealer_win_rate = summary.dealer_wins as f64 / scored as f64;
        summary.draw_rate = summary.draws as f64 / scored as f64;
        summary.mean_player_score = score_sum.0 as f64 / scored as f64;
        summary.mean_dealer_score = score_sum.1 as f64 / scored as f64;
    }
    summary
}
