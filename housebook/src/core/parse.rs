//! Line parser: one raw input line to a validated record or a rejection.
//!
//! A bad line never aborts the run. The caller receives a [`LineError`]
//! naming the first failed check and moves on to the next line.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::core::record::House;
use crate::core::validate::{checked_date, is_valid_cost, is_valid_owner};

/// Why a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// Line does not match `"<owner>" DD.MM.YYYY <cost>`.
    #[error("invalid line format")]
    Format,

    /// A captured digit run does not fit the field's integer type.
    #[error("invalid number in {field}: {source}")]
    Number {
        field: &'static str,
        source: ParseIntError,
    },

    /// Day/month/year triple does not denote a real calendar date.
    #[error("no such calendar date")]
    Date,

    /// Owner is not 1 to 3 words of Latin or Cyrillic letters.
    #[error("invalid owner name")]
    Owner,

    /// Cost is negative. Unreachable from the digit-only grammar, kept so
    /// the check survives grammar changes.
    #[error("negative cost")]
    Cost,
}

/// Parse one input line into a [`House`].
///
/// Checks run in a fixed order: structure, numeric fields (day, month,
/// year, cost), calendar-date validity, owner shape, cost sign. The first
/// failure wins; later fields are not inspected.
pub fn parse_line(line: &str) -> Result<House, LineError> {
    use std::sync::LazyLock;
    static LINE_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
        regex::Regex::new(r#"^"([^"]+)"\s+([0-9]{2})\.([0-9]{2})\.([0-9]{4})\s+([0-9]+)$"#)
            .unwrap()
    });

    let caps = LINE_RE.captures(line).ok_or(LineError::Format)?;

    let owner = &caps[1];
    let day: u32 = parse_field(&caps[2], "day")?;
    let month: u32 = parse_field(&caps[3], "month")?;
    let year: i32 = parse_field(&caps[4], "year")?;
    let cost: i32 = parse_field(&caps[5], "cost")?;

    let date = checked_date(year, month, day).ok_or(LineError::Date)?;
    if !is_valid_owner(owner) {
        return Err(LineError::Owner);
    }
    if !is_valid_cost(cost) {
        return Err(LineError::Cost);
    }

    Ok(House {
        owner: owner.to_string(),
        date,
        cost,
    })
}

fn parse_field<T>(raw: &str, field: &'static str) -> Result<T, LineError>
where
    T: FromStr<Err = ParseIntError>,
{
    raw.parse()
        .map_err(|source| LineError::Number { field, source })
}
