//! Core data models for the expense ledger
//!
//! - `LedgerMonth`: the calendar month a ledger file covers
//! - `ExpenseRecord`: one row of a ledger, stored as entered

pub mod expense;
pub mod month;

pub use expense::{coerce_amount, coerce_day, ExpenseRecord};
pub use month::{LedgerMonth, MONTH_NAMES};
