//! Summary display formatting
//!
//! Texts shown in the form's result label and printed by the CLI.

use tabled::{settings::Style, Table, Tabled};

use crate::config::settings::Settings;
use crate::models::LedgerMonth;
use crate::services::CategoryTotal;

/// Label text when the current month has no ledger yet (total query)
pub const NO_LEDGER_TOTAL: &str = "No CSV file found.";

/// Label text when the current month has no ledger yet (category query)
pub const NO_LEDGER_CATEGORY: &str = "No data for this month.";

/// Format the month total label
pub fn format_total(settings: &Settings, total: f64) -> String {
    format!("Total: {}", settings.format_amount(total))
}

/// Format a category total label
pub fn format_category_total(settings: &Settings, category: &str, total: f64) -> String {
    format!("{}: {}", category, settings.format_amount(total))
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format a per-category breakdown as a table
pub fn format_breakdown_table(
    settings: &Settings,
    month: LedgerMonth,
    rows: &[CategoryTotal],
) -> String {
    let grand_total: f64 = rows.iter().map(|r| r.total).sum();
    let entries: usize = rows.iter().map(|r| r.entries).sum();

    let mut table_rows: Vec<BreakdownRow> = rows
        .iter()
        .map(|r| BreakdownRow {
            category: r.category.clone(),
            entries: r.entries,
            total: settings.format_amount(r.total),
        })
        .collect();
    table_rows.push(BreakdownRow {
        category: "TOTAL".to_string(),
        entries,
        total: settings.format_amount(grand_total),
    });

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());

    format!(
        "Expenses for {} {}\n{}\n",
        month.month_name(),
        month.year,
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let settings = Settings::default();
        assert_eq!(format_total(&settings, 15.5), "Total: 15.50");
        assert_eq!(
            format_category_total(&settings, "Internet Service", 40.0),
            "Internet Service: 40.00"
        );
    }

    #[test]
    fn test_breakdown_table() {
        let settings = Settings::default();
        let rows = vec![
            CategoryTotal {
                category: "Food".to_string(),
                total: 12.5,
                entries: 2,
            },
            CategoryTotal {
                category: "Entertainment".to_string(),
                total: 0.0,
                entries: 0,
            },
        ];

        let output = format_breakdown_table(&settings, LedgerMonth::new(2025, 3), &rows);

        assert!(output.starts_with("Expenses for March 2025\n"));
        assert!(output.contains("Category"));
        assert!(output.contains("Food"));
        assert!(output.contains("12.50"));
        assert!(output.contains("TOTAL"));
    }
}
