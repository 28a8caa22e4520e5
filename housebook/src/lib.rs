//! Real-estate ownership records: parse, validate, sort, browse.
//!
//! The crate reads a flat text file of `"owner" DD.MM.YYYY cost` lines,
//! keeps the lines that survive validation, and serves them through an
//! interactive numbered menu with three sort orders. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (validators, line parser,
//!   sorter, record formatting). No I/O, fully testable on strings.
//! - **[`io`]**: Side-effecting operations (reading the input file, the
//!   console menu loop). Generic over reader/writer so tests can script
//!   sessions.
//!
//! [`browse`] coordinates the two to implement the binary.

pub mod browse;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(test)]
mod test_support;
