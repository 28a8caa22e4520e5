//! In-place stable sorting of the record store.

use crate::core::record::House;

/// Sort key chosen from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// First whitespace-delimited token of the owner name.
    LastName,
    /// Second token of the owner name; missing token sorts first.
    FirstName,
    /// Chronological order of the purchase date.
    Date,
}

/// Reorder `records` by `key`, keeping input order for equal keys.
///
/// Name keys are folded to lowercase before comparing, so `иванов` and
/// `Иванов` compare equal and keep their prior relative order.
pub fn sort_records(records: &mut [House], key: SortKey) {
    match key {
        SortKey::LastName => records.sort_by_cached_key(|house| name_token(&house.owner, 0)),
        SortKey::FirstName => records.sort_by_cached_key(|house| name_token(&house.owner, 1)),
        SortKey::Date => records.sort_by_key(|house| house.date),
    }
}

fn name_token(owner: &str, index: usize) -> String {
    owner
        .split_whitespace()
        .nth(index)
        .unwrap_or_default()
        .to_lowercase()
}
