//! Field validators consumed by the line parser.
//!
//! Each check is a pure predicate over already-extracted field values. The
//! parser applies them in a fixed order and reports the first failure.

use chrono::NaiveDate;

/// Build the calendar date for a year/month/day triple.
///
/// Returns `None` for triples that do not denote a real date, such as
/// month 13 or Feb 29 in a non-leap year.
pub fn checked_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// True iff the year/month/day triple denotes an existing calendar date.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    checked_date(year, month, day).is_some()
}

/// True iff `owner` is 1 to 3 single-space-separated words made only of
/// Latin (`A-Za-z`) or Cyrillic (`А-Яа-я`) letters.
///
/// Digits, punctuation, leading/trailing spaces, and a fourth word all fail.
pub fn is_valid_owner(owner: &str) -> bool {
    use std::sync::LazyLock;
    static OWNER_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
        regex::Regex::new(r"^[A-Za-zА-Яа-я]+( [A-Za-zА-Яа-я]+)?( [A-Za-zА-Яа-я]+)?$").unwrap()
    });

    OWNER_RE.is_match(owner)
}

/// True iff `cost` is non-negative.
///
/// The line grammar only captures digit sequences, so a negative value
/// cannot reach this check today; it guards the contract should the
/// grammar ever admit signs.
pub fn is_valid_cost(cost: i32) -> bool {
    cost >= 0
}
