//! Service layer for the expense ledger
//!
//! The service layer provides the form's operations on top of the storage
//! layer: recording expenses and computing totals.

pub mod expense;
pub mod summary;

pub use expense::{ExpenseService, SELECT_PLACEHOLDER};
pub use summary::{CategoryTotal, SummaryService};
