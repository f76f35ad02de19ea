//! Expense Ledger - month-by-month expense tracking in the terminal
//!
//! Expenses are appended to one CSV ledger per calendar month. The library
//! answers totals over a month (overall or per category) and builds daily
//! and monthly bar charts from the ledgers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and settings
//! - `error`: Custom error types
//! - `models`: Ledger months and expense records
//! - `storage`: CSV ledger files
//! - `services`: Entry validation and summaries
//! - `reports`: Daily and yearly chart data
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `tui`: Interactive entry form
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
//! use expense_ledger::services::SummaryService;
//! use expense_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let total = SummaryService::new(&storage).total(LedgerMonth::current())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::LedgerError;
