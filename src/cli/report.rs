//! CLI commands for summaries and charts
//!
//! A month without a ledger is reported and the command still succeeds.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_breakdown_table, format_category_total, format_total};
use crate::error::LedgerResult;
use crate::models::LedgerMonth;
use crate::reports::{DailyExpenseReport, YearlyExpenseReport};
use crate::services::SummaryService;
use crate::storage::Storage;

/// Summary and chart subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the total spent in a month
    Total {
        /// Ledger month (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = LedgerMonth::parse)]
        month: Option<LedgerMonth>,
    },

    /// Show the total spent on one category in a month
    Category {
        /// Category name (exact, case-sensitive)
        name: String,

        /// Ledger month (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = LedgerMonth::parse)]
        month: Option<LedgerMonth>,
    },

    /// Show totals for every category of a month
    Summary {
        /// Ledger month (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = LedgerMonth::parse)]
        month: Option<LedgerMonth>,
    },

    /// Draw a bar chart
    #[command(subcommand)]
    Chart(ChartCommands),
}

/// Chart subcommands
#[derive(Subcommand, Debug)]
pub enum ChartCommands {
    /// Daily expenses of one month
    Monthly {
        /// Ledger month (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = LedgerMonth::parse)]
        month: Option<LedgerMonth>,

        /// Width of the longest bar
        #[arg(short, long, default_value = "40")]
        width: usize,
    },

    /// Monthly totals of one year
    Yearly {
        /// Year, defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,

        /// Width of the longest bar
        #[arg(short, long, default_value = "40")]
        width: usize,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    match cmd {
        ReportCommands::Total { month } => handle_total(storage, settings, month),
        ReportCommands::Category { name, month } => {
            handle_category_total(storage, settings, &name, month)
        }
        ReportCommands::Summary { month } => handle_summary(storage, settings, month),
        ReportCommands::Chart(ChartCommands::Monthly { month, width }) => {
            handle_monthly_chart(storage, month, width)
        }
        ReportCommands::Chart(ChartCommands::Yearly { year, width }) => {
            handle_yearly_chart(storage, year, width)
        }
    }
}

fn handle_total(
    storage: &Storage,
    settings: &Settings,
    month: Option<LedgerMonth>,
) -> LedgerResult<()> {
    let month = month.unwrap_or_else(LedgerMonth::current);
    let service = SummaryService::new(storage);

    match service.total(month) {
        Ok(total) => println!("{}", format_total(settings, total)),
        Err(e) if e.is_not_found() => println!(
            "No CSV file found for {}. Please add some data first.",
            month
        ),
        Err(e) => return Err(e),
    }

    Ok(())
}

fn handle_category_total(
    storage: &Storage,
    settings: &Settings,
    name: &str,
    month: Option<LedgerMonth>,
) -> LedgerResult<()> {
    let month = month.unwrap_or_else(LedgerMonth::current);
    let service = SummaryService::new(storage);

    match service.category_total(month, name) {
        Ok(total) => println!("{}", format_category_total(settings, name, total)),
        Err(e) if e.is_not_found() => println!(
            "No CSV file found for {}. Cannot calculate {} total.",
            month, name
        ),
        Err(e) => return Err(e),
    }

    Ok(())
}

fn handle_summary(
    storage: &Storage,
    settings: &Settings,
    month: Option<LedgerMonth>,
) -> LedgerResult<()> {
    let month = month.unwrap_or_else(LedgerMonth::current);
    let service = SummaryService::new(storage);

    match service.category_breakdown(month, &settings.categories) {
        Ok(rows) => print!("{}", format_breakdown_table(settings, month, &rows)),
        Err(e) if e.is_not_found() => println!(
            "No CSV file found for {}. Please add some data first.",
            month
        ),
        Err(e) => return Err(e),
    }

    Ok(())
}

fn handle_monthly_chart(
    storage: &Storage,
    month: Option<LedgerMonth>,
    width: usize,
) -> LedgerResult<()> {
    let month = month.unwrap_or_else(LedgerMonth::current);

    match DailyExpenseReport::generate(storage, month) {
        Ok(report) => print!("{}", report.format_terminal(width)),
        Err(e) if e.is_not_found() => println!(
            "No data found for {}. File {} does not exist.",
            month,
            month.file_name()
        ),
        Err(e) => return Err(e),
    }

    Ok(())
}

fn handle_yearly_chart(storage: &Storage, year: Option<i32>, width: usize) -> LedgerResult<()> {
    let year = year.unwrap_or_else(|| LedgerMonth::current().year);
    let report = YearlyExpenseReport::generate(storage, year)?;
    print!("{}", report.format_terminal(width));
    Ok(())
}
