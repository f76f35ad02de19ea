//! Summary service
//!
//! Totals over one month's ledger. Amounts are coerced to numbers at read
//! time; anything that does not parse is treated as missing and left out of
//! the sum.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::LedgerResult;
use crate::models::{ExpenseRecord, LedgerMonth};
use crate::storage::Storage;

/// Total for one category of a month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name, as stored in the `Reason` column
    pub category: String,
    /// Sum of the numeric amounts
    pub total: f64,
    /// Number of rows with this reason
    pub entries: usize,
}

/// Service for ledger totals
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Sum of every numeric amount in the month's ledger
    ///
    /// Fails with a not-found error when the month has no ledger yet.
    pub fn total(&self, month: LedgerMonth) -> LedgerResult<f64> {
        let records = self.read(month)?;
        let total = sum_amounts(records.iter());
        debug!(month = %month, total, "computed month total");
        Ok(total)
    }

    /// Sum of the numeric amounts whose reason matches `category` exactly
    pub fn category_total(&self, month: LedgerMonth, category: &str) -> LedgerResult<f64> {
        let records = self.read(month)?;
        let total = sum_amounts(records.iter().filter(|r| r.is_category(category)));
        debug!(month = %month, category, total, "computed category total");
        Ok(total)
    }

    /// Totals for each configured category, followed by any other reasons found
    ///
    /// Configured categories are always listed, with a zero total when the month
    /// has no entries for them.
    pub fn category_breakdown(
        &self,
        month: LedgerMonth,
        categories: &[String],
    ) -> LedgerResult<Vec<CategoryTotal>> {
        let records = self.read(month)?;
        Ok(breakdown(&records, categories))
    }

    fn read(&self, month: LedgerMonth) -> LedgerResult<Vec<ExpenseRecord>> {
        self.storage.ledgers.read(month).inspect_err(|e| {
            if e.is_not_found() {
                warn!(month = %month, "no ledger for month");
            }
        })
    }
}

/// Sum the amounts of the given records, skipping non-numeric values
pub fn sum_amounts<'r>(records: impl Iterator<Item = &'r ExpenseRecord>) -> f64 {
    records.filter_map(ExpenseRecord::amount_value).sum()
}

/// Group records by reason
fn breakdown(records: &[ExpenseRecord], categories: &[String]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = categories
        .iter()
        .map(|category| CategoryTotal {
            category: category.clone(),
            total: 0.0,
            entries: 0,
        })
        .collect();

    let mut others: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for record in records {
        let amount = record.amount_value().unwrap_or(0.0);
        if let Some(row) = totals.iter_mut().find(|t| record.is_category(&t.category)) {
            row.total += amount;
            row.entries += 1;
        } else {
            let entry = others.entry(record.reason.as_str()).or_insert((0.0, 0));
            entry.0 += amount;
            entry.1 += 1;
        }
    }

    totals.extend(others.into_iter().map(|(category, (total, entries))| CategoryTotal {
        category: category.to_string(),
        total,
        entries,
    }));

    totals
}
