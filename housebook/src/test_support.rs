//! Test-only helpers for constructing ownership records.

use chrono::NaiveDate;

use crate::core::record::House;

/// Create a record from literal parts.
///
/// Panics on an impossible date; fixtures are expected to use real ones.
pub fn house(owner: &str, year: i32, month: u32, day: u32, cost: i32) -> House {
    House {
        owner: owner.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).expect("test date must exist"),
        cost,
    }
}
