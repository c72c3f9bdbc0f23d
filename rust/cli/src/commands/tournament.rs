//! Tournament command handler: cross every player threshold with every
//! dealer threshold and tabulate the results.

use crate::commands::sim::{run_batch, BatchOptions, BatchTally};
use crate::error::CliError;
use crate::ui;
use std::io::Write;
use std::path::Path;

/// Handle the tournament command: one batch per strategy pairing, each
/// logged to `OUTDIR/keepP-vs-keepD.jsonl`, plus a `results.txt` holding
/// three row-major matrices (player win rate, draw rate, dealer win rate)
/// separated by rows of `-1.000000`. Rows follow the player thresholds,
/// columns the dealer thresholds.
#[allow(clippy::too_many_arguments)]
pub fn handle_tournament_command(
    player_thresholds: Vec<u32>,
    dealer_thresholds: Vec<u32>,
    games: u64,
    outdir: String,
    seed: Option<u64>,
    remove_drawn: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    if player_thresholds.is_empty() || dealer_thresholds.is_empty() {
        ui::write_error(err, "both threshold lists must be non-empty")?;
        return Err(CliError::InvalidInput(
            "both threshold lists must be non-empty".to_string(),
        ));
    }

    let outdir = Path::new(&outdir);
    std::fs::create_dir_all(outdir)?;

    let mut tallies: Vec<Vec<BatchTally>> = Vec::with_capacity(player_thresholds.len());
    let mut pairing = 0u64;

    for &p in &player_thresholds {
        let mut row = Vec::with_capacity(dealer_thresholds.len());
        for &d in &dealer_thresholds {
            let log = outdir.join(format!("keep{}-vs-keep{}.jsonl", p, d));
            let options = BatchOptions {
                games: games as usize,
                output: Some(log.to_string_lossy().to_string()),
                // Distinct stream per pairing, still reproducible from one seed
                seed: seed.map(|s| s + pairing),
                turns: 13,
                remove_drawn,
                log_all: false,
                player_strategy: format!("keep{}", p),
                dealer_strategy: format!("keep{}", d),
                quiet: true,
            };
            let tally = run_batch(&options, out)?;
            writeln!(
                out,
                "keep{} vs keep{}: player {:.6} draw {:.6} dealer {:.6}",
                p,
                d,
                tally.player_win_rate(),
                tally.draw_rate(),
                tally.dealer_win_rate()
            )?;
            row.push(tally);
            pairing += 1;
        }
        tallies.push(row);
    }

    let results = render_results(&tallies);
    std::fs::write(outdir.join("results.txt"), results)?;
    writeln!(out, "Results written to {}", outdir.join("results.txt").display())?;
    Ok(())
}

/// Renders the three rate matrices with a `-1.000000` separator row
/// between them, six decimals throughout.
fn render_results(tallies: &[Vec<BatchTally>]) -> String {
    let columns = tallies.first().map_or(0, Vec::len);
    let separator: String = vec!["-1.000000"; columns].join(" ");

    let matrix = |rate: fn(&BatchTally) -> f64| -> String {
        tallies
            .iter()
            .map(|row| {
                row.iter()
                    .map(|t| format!("{:.6}", rate(t)))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{}\n{}\n{}\n{}\n{}\n",
        matrix(BatchTally::player_win_rate),
        separator,
        matrix(BatchTally::draw_rate),
        separator,
        matrix(BatchTally::dealer_win_rate)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(games: usize, player_wins: usize, dealer_wins: usize) -> BatchTally {
        BatchTally {
            games,
            player_wins,
            dealer_wins,
            draws: games - player_wins - dealer_wins,
        }
    }

    #[test]
    fn results_hold_three_matrices_with_separators() {
        let tallies = vec![
            vec![tally(10, 5, 4), tally(10, 2, 8)],
            vec![tally(10, 10, 0), tally(10, 0, 0)],
        ];
        let text = render_results(&tallies);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "0.500000 0.200000");
        assert_eq!(lines[1], "1.000000 0.000000");
        assert_eq!(lines[2], "-1.000000 -1.000000");
        assert_eq!(lines[3], "0.100000 0.000000");
        assert_eq!(lines[4], "0.000000 1.000000");
        assert_eq!(lines[5], "-1.000000 -1.000000");
        assert_eq!(lines[6], "0.400000 0.800000");
        assert_eq!(lines[7], "0.000000 0.000000");
    }

    #[test]
    fn tournament_writes_per_pairing_logs_and_results() {
        let dir = tempfile::tempdir().unwrap();
        let outdir = dir.path().join("arena");
        let mut out = Vec::new();
        let mut err = Vec::new();

        handle_tournament_command(
            vec![7, 8],
            vec![8],
            3,
            outdir.to_string_lossy().to_string(),
            Some(42),
            true,
            &mut out,
            &mut err,
        )
        .unwrap();

        for name in ["keep7-vs-keep8.jsonl", "keep8-vs-keep8.jsonl"] {
            let records = leher_engine::logger::read_records(outdir.join(name)).unwrap();
            assert_eq!(records.len(), 3, "{name}");
        }

        let results = std::fs::read_to_string(outdir.join("results.txt")).unwrap();
        assert_eq!(results.lines().count(), 8);
        assert_eq!(results.lines().filter(|l| l.starts_with("-1.000000")).count(), 2);
    }

    #[test]
    fn tournament_rejects_empty_threshold_lists() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_tournament_command(
            vec![],
            vec![8],
            3,
            "unused".to_string(),
            None,
            true,
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn tournament_rejects_invalid_thresholds() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_tournament_command(
            vec![0],
            vec![8],
            1,
            dir.path().to_string_lossy().to_string(),
            None,
            true,
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
