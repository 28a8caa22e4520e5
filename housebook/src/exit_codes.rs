//! Stable exit codes for the housebook binary.

/// Normal completion, including menu exit and end of piped input.
pub const OK: i32 = 0;
/// Input file could not be opened or read; no records were processed.
pub const OPEN_FAILED: i32 = 1;
