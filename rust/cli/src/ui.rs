//! Helpers for consistent terminal output across command handlers.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// One progress line per whole percent of a batch run.
pub fn write_progress(out: &mut dyn Write, completed: usize, total: usize) -> std::io::Result<()> {
    writeln!(out, "{}% ({}/{})", completed * 100 / total, completed, total)
}
