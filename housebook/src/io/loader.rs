//! Input-file loading: read, split into lines, parse each one.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::parse::{LineError, parse_line};
use crate::core::record::House;

/// Everything one load pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Accepted records, in input file order.
    pub records: Vec<House>,
    /// Rejected lines with the reason each one was skipped.
    pub skipped: Vec<SkippedLine>,
}

/// One rejected input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input file.
    pub line_no: usize,
    /// The raw line as read, without the terminator.
    pub line: String,
    pub error: LineError,
}

/// Read `path` and parse every line.
///
/// The whole file is read up front, so the handle is closed before any
/// interaction starts. Only the open/read failure is fatal; bad lines
/// land in [`LoadOutcome::skipped`].
pub fn load_records(path: &Path) -> Result<LoadOutcome> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("open input file {}", path.display()))?;
    Ok(parse_lines(&contents))
}

/// Parse `contents` line by line, keeping file order for accepted records.
///
/// Line terminators (`\n` or `\r\n`) are stripped before matching. Blank
/// lines do not match the grammar and are reported like any other
/// malformed line.
pub fn parse_lines(contents: &str) -> LoadOutcome {
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line_no = index + 1;
        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(error) => {
                debug!(line_no, %error, "line rejected");
                skipped.push(SkippedLine {
                    line_no,
                    line: line.to_string(),
                    error,
                });
            }
        }
    }

    LoadOutcome { records, skipped }
}
