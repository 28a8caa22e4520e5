//! Ownership record shared by parsing, sorting, and presentation.
//!
//! A [`House`] is immutable after construction: sorting reorders the
//! store, it never rewrites fields.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// One validated real-estate ownership record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    /// Owner name, 1 to 3 space-separated words of Latin or Cyrillic letters.
    pub owner: String,
    /// Purchase date; always a real calendar date.
    pub date: NaiveDate,
    /// Cost in whole currency units, never negative.
    pub cost: i32,
}

impl House {
    /// Render the date as `D.M.YYYY` with no zero padding.
    pub fn format_date(&self) -> String {
        format!(
            "{}.{}.{}",
            self.date.day(),
            self.date.month(),
            self.date.year()
        )
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Owner: {}", self.owner)?;
        writeln!(f, "Date: {}", self.format_date())?;
        write!(f, "Cost: {} rub.", self.cost)
    }
}
