//! Daily expense chart
//!
//! Groups one month's ledger by day and sums the amounts of each day.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::display::chart::format_bar_chart;
use crate::error::LedgerResult;
use crate::models::{ExpenseRecord, LedgerMonth};
use crate::storage::Storage;

/// Total spent on one day of the month
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub day: u32,
    pub total: f64,
}

/// Daily totals for one month, ordered by day
#[derive(Debug, Clone)]
pub struct DailyExpenseReport {
    pub month: LedgerMonth,
    pub days: Vec<DailyTotal>,
}

impl DailyExpenseReport {
    /// Generate the report for a month
    ///
    /// Fails with a not-found error when the month has no ledger.
    pub fn generate(storage: &Storage, month: LedgerMonth) -> LedgerResult<Self> {
        let records = storage.ledgers.read(month).inspect_err(|e| {
            if e.is_not_found() {
                warn!(
                    month = %month,
                    file = %month.file_name(),
                    "no data for daily chart"
                );
            }
        })?;

        let report = Self::from_records(month, &records);
        info!(month = %month, days = report.days.len(), "generated daily chart");
        Ok(report)
    }

    /// Build the report from already loaded records
    ///
    /// Rows whose day is not a number are left out. Rows whose amount is not a
    /// number still mark their day but add nothing to it.
    pub fn from_records(month: LedgerMonth, records: &[ExpenseRecord]) -> Self {
        let mut by_day: BTreeMap<u32, f64> = BTreeMap::new();

        for record in records {
            if let Some(day) = record.day_number() {
                *by_day.entry(day).or_insert(0.0) += record.amount_value().unwrap_or(0.0);
            }
        }

        Self {
            month,
            days: by_day
                .into_iter()
                .map(|(day, total)| DailyTotal { day, total })
                .collect(),
        }
    }

    /// Chart title
    pub fn title(&self) -> String {
        format!("Daily Expenses for {}", self.month)
    }

    /// Largest daily total (0 when empty)
    pub fn max_total(&self) -> f64 {
        self.days.iter().map(|d| d.total).fold(0.0, f64::max)
    }

    /// Sum of all daily totals
    pub fn grand_total(&self) -> f64 {
        self.days.iter().map(|d| d.total).sum()
    }

    /// Format the chart for terminal display
    pub fn format_terminal(&self, bar_width: usize) -> String {
        let rows: Vec<(String, f64)> = self
            .days
            .iter()
            .map(|d| (format!("Day {:>2}", d.day), d.total))
            .collect();

        let mut output = String::new();
        output.push_str(&self.title());
        output.push('\n');
        if rows.is_empty() {
            output.push_str("No entries with a numeric day.\n");
        } else {
            output.push_str(&format_bar_chart(&rows, bar_width));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    #[test]
    fn test_groups_and_sorts_by_day() {
        let month = LedgerMonth::new(2025, 5);
        let records = vec![
            ExpenseRecord::new("5", "12", "Food"),
            ExpenseRecord::new("10", "3", "Food"),
            ExpenseRecord::new("2.5", "12", "Entertainment"),
            ExpenseRecord::new("abc", "7", "Food"),
            ExpenseRecord::new("100", "someday", "Food"),
        ];

        let report = DailyExpenseReport::from_records(month, &records);

        assert_eq!(
            report.days,
            vec![
                DailyTotal {
                    day: 3,
                    total: 10.0
                },
                DailyTotal { day: 7, total: 0.0 },
                DailyTotal {
                    day: 12,
                    total: 7.5
                },
            ]
        );
        assert_eq!(report.max_total(), 10.0);
        assert_eq!(report.grand_total(), 17.5);
        assert_eq!(report.title(), "Daily Expenses for 2025-05");
    }

    #[test]
    fn test_generate_missing_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let month = LedgerMonth::new(2025, 5);

        let err = DailyExpenseReport::generate(&storage, month).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_format_terminal() {
        let month = LedgerMonth::new(2025, 5);
        let records = vec![
            ExpenseRecord::new("10", "1", "Food"),
            ExpenseRecord::new("5", "2", "Food"),
        ];
        let report = DailyExpenseReport::from_records(month, &records);
        let output = report.format_terminal(10);

        assert!(output.starts_with("Daily Expenses for 2025-05\n"));
        assert!(output.contains("Day  1 │██████████ 10.00"));
        assert!(output.contains("Day  2 │█████░░░░░ 5.00"));
    }
}
