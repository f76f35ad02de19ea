//! Yearly expense chart
//!
//! One bar per calendar month. Each month is summed from its own ledger; a
//! month without a ledger contributes 0.

use tracing::info;

use crate::display::chart::format_bar_chart;
use crate::error::LedgerResult;
use crate::models::LedgerMonth;
use crate::services::summary::sum_amounts;
use crate::storage::Storage;

/// Total for one month of the year
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotal {
    pub month: LedgerMonth,
    pub total: f64,
    /// Whether the month had a ledger file
    pub has_ledger: bool,
}

/// Monthly totals for a whole year, January to December
#[derive(Debug, Clone)]
pub struct YearlyExpenseReport {
    pub year: i32,
    pub months: Vec<MonthTotal>,
}

impl YearlyExpenseReport {
    /// Generate the report for a year
    pub fn generate(storage: &Storage, year: i32) -> LedgerResult<Self> {
        let mut months = Vec::with_capacity(12);

        for month in LedgerMonth::months_of(year) {
            let entry = match storage.ledgers.read_optional(month)? {
                Some(records) => MonthTotal {
                    month,
                    total: sum_amounts(records.iter()),
                    has_ledger: true,
                },
                None => MonthTotal {
                    month,
                    total: 0.0,
                    has_ledger: false,
                },
            };
            months.push(entry);
        }

        let report = Self { year, months };
        info!(
            year,
            ledgers = report.months.iter().filter(|m| m.has_ledger).count(),
            "generated yearly chart"
        );
        Ok(report)
    }

    /// Chart title
    pub fn title(&self) -> String {
        format!("Monthly Expense Summary for {}", self.year)
    }

    /// Largest monthly total (0 when every month is empty)
    pub fn max_total(&self) -> f64 {
        self.months.iter().map(|m| m.total).fold(0.0, f64::max)
    }

    /// Sum over the whole year
    pub fn grand_total(&self) -> f64 {
        self.months.iter().map(|m| m.total).sum()
    }

    /// Format the chart for terminal display
    pub fn format_terminal(&self, bar_width: usize) -> String {
        let rows: Vec<(String, f64)> = self
            .months
            .iter()
            .map(|m| (m.month.month_name().to_string(), m.total))
            .collect();

        let mut output = String::new();
        output.push_str(&self.title());
        output.push('\n');
        output.push_str(&format_bar_chart(&rows, bar_width));
        output.push_str(&format!("Total: {:.2}\n", self.grand_total()));
        output
    }
}
