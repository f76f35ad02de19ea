//! Expense entry service
//!
//! Records form submissions. Amount and day are written exactly as typed; only
//! the reason is checked, since it must come from the configured categories.

use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseRecord, LedgerMonth};
use crate::storage::Storage;

/// Text shown by the category selector before a choice is made
pub const SELECT_PLACEHOLDER: &str = "Select Option";

/// Service for recording expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Append an expense to the month's ledger
    ///
    /// Returns the ledger path that was written.
    pub fn submit(
        &self,
        month: LedgerMonth,
        amount: &str,
        day: &str,
        reason: &str,
    ) -> LedgerResult<PathBuf> {
        if reason.is_empty() || reason == SELECT_PLACEHOLDER {
            return Err(LedgerError::Validation("Select a category first".into()));
        }
        self.settings.require_category(reason)?;

        let record = ExpenseRecord::new(amount, day, reason);
        self.storage.ledgers.append(month, &record)
    }
}
