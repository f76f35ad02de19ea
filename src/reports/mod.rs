//! Chart reports for the expense ledger
//!
//! Provides the daily chart for one month and the monthly chart for a year.

pub mod daily;
pub mod yearly;

pub use daily::{DailyExpenseReport, DailyTotal};
pub use yearly::{MonthTotal, YearlyExpenseReport};
