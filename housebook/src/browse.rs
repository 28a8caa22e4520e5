//! Orchestration: load the input file, report skips, run the menu.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::io::loader::load_records;
use crate::io::menu::run_menu;

/// Load records from `path`, then browse them interactively.
///
/// Every rejected input line gets one diagnostic on `errors` before the
/// menu starts. A file that cannot be opened is the only fatal error;
/// the caller maps it to the failure exit code.
pub fn run(
    path: &Path,
    input: impl BufRead,
    output: impl Write,
    mut errors: impl Write,
) -> Result<()> {
    let mut outcome = load_records(path)?;

    for skip in &outcome.skipped {
        writeln!(
            errors,
            "skipping line {}: {}: {}",
            skip.line_no, skip.error, skip.line
        )
        .context("write diagnostic")?;
    }
    info!(
        records = outcome.records.len(),
        skipped = outcome.skipped.len(),
        "input file parsed"
    );

    run_menu(&mut outcome.records, input, output, errors)
}
