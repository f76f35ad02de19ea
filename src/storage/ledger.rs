//! Monthly ledger repository
//!
//! One CSV file per calendar month, named `expenses_<year>_<MM>.csv`, with
//! the columns `Amount,Day,Reason`.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseRecord, LedgerMonth};

use super::csv_io::{append_csv_record, read_csv_records};

/// Repository for the per-month CSV ledgers
pub struct LedgerRepository {
    dir: PathBuf,
}

impl LedgerRepository {
    /// Create a repository rooted at the ledger directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the ledger for a month
    pub fn path(&self, month: LedgerMonth) -> PathBuf {
        self.dir.join(month.file_name())
    }

    /// Check whether a month already has a ledger
    pub fn exists(&self, month: LedgerMonth) -> bool {
        self.path(month).exists()
    }

    /// Append a record to the month's ledger, creating it with a header if absent
    ///
    /// Returns the path written to.
    pub fn append(&self, month: LedgerMonth, record: &ExpenseRecord) -> LedgerResult<PathBuf> {
        let path = self.path(month);
        let created = append_csv_record(&path, record)?;

        if created {
            info!(month = %month, path = %path.display(), "created ledger");
        }
        info!(
            month = %month,
            amount = %record.amount,
            day = %record.day,
            reason = %record.reason,
            "appended expense"
        );

        Ok(path)
    }

    /// Read all records of a month, in insertion order
    ///
    /// Fails with [`LedgerError::LedgerNotFound`] when the month has no ledger.
    pub fn read(&self, month: LedgerMonth) -> LedgerResult<Vec<ExpenseRecord>> {
        self.read_optional(month)?
            .ok_or_else(|| LedgerError::ledger_not_found(month))
    }

    /// Read all records of a month, or `None` when the month has no ledger
    pub fn read_optional(&self, month: LedgerMonth) -> LedgerResult<Option<Vec<ExpenseRecord>>> {
        let path = self.path(month);
        let records = read_csv_records::<ExpenseRecord, _>(&path)?;

        match &records {
            Some(rows) => debug!(month = %month, rows = rows.len(), "read ledger"),
            None => debug!(month = %month, path = %path.display(), "no ledger"),
        }

        Ok(records)
    }
}
