//! Expense entry CLI command
//!
//! Appends one expense to a month's ledger, the same way the form's submit
//! action does.

use clap::Args;

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::models::LedgerMonth;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Arguments for `expense add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (stored as typed)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Day of the month (stored as typed)
    #[arg(allow_hyphen_values = true)]
    pub day: String,

    /// Category, one of the configured categories
    pub reason: String,

    /// Ledger month (YYYY-MM), defaults to the current month
    #[arg(short, long, value_parser = LedgerMonth::parse)]
    pub month: Option<LedgerMonth>,
}

/// Handle `expense add`
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> LedgerResult<()> {
    let month = args.month.unwrap_or_else(LedgerMonth::current);
    let service = ExpenseService::new(storage, settings);

    let path = service.submit(month, &args.amount, &args.day, &args.reason)?;

    println!("Amount: {}", args.amount);
    println!("Day: {}", args.day);
    println!("Reason: {}", args.reason);
    println!("Data saved to {}.", path.display());

    Ok(())
}
