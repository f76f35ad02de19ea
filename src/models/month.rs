//! Ledger month representation
//!
//! Each ledger file covers exactly one calendar month, identified by year and
//! month number.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// English month names, indexed by `month - 1`
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month that owns one ledger file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LedgerMonth {
    pub year: i32,
    pub month: u32,
}

impl LedgerMonth {
    /// Create a ledger month
    ///
    /// Out-of-range months are clamped into 1..=12.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::new(today.year(), today.month())
    }

    /// All twelve months of a year, January first
    pub fn months_of(year: i32) -> impl Iterator<Item = LedgerMonth> {
        (1..=12).map(move |month| LedgerMonth::new(year, month))
    }

    /// Parse a month from "YYYY-MM" format
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month '{}', expected YYYY-MM", s))?;

        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year in '{}'", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month in '{}'", s))?;

        if !(1..=12).contains(&month) {
            return Err(format!("Month must be between 1 and 12, got {}", month));
        }

        Ok(Self { year, month })
    }

    /// File name of this month's ledger, e.g. `expenses_2025_01.csv`
    pub fn file_name(&self) -> String {
        format!("expenses_{}_{:02}.csv", self.year, self.month)
    }

    /// Full English name of the month
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month as usize).saturating_sub(1).min(11)]
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }
}

impl fmt::Display for LedgerMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
