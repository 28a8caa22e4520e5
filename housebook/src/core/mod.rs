//! Pure record logic: validation, line parsing, and sorting.
//!
//! Nothing in this module touches the filesystem or the console, so every
//! rule is testable on plain strings and in-memory records.

pub mod parse;
pub mod record;
pub mod sort;
pub mod validate;
