use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{handle_add_command, handle_report_command, AddArgs, ReportCommands};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::logging::init_tracing;
use expense_ledger::models::LedgerMonth;
use expense_ledger::storage::Storage;
use expense_ledger::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Month-by-month expense tracker",
    long_about = "Records expenses into one CSV ledger per month, reports totals \
                  per month and per category, and draws daily and monthly bar \
                  charts. Run without a command to open the entry form."
)]
struct Cli {
    /// Base directory for settings, ledgers and the log file
    #[arg(long, global = true, env = "EXPENSE_LEDGER_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive entry form
    #[command(alias = "ui")]
    Tui {
        /// Work on this month (YYYY-MM) instead of the current one
        #[arg(short, long, value_parser = LedgerMonth::parse)]
        month: Option<LedgerMonth>,
    },

    /// Record an expense
    Add(AddArgs),

    #[command(flatten)]
    Report(ReportCommands),

    /// List the configured categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&paths)?;

    let storage = Storage::new(paths)?;

    match cli.command {
        None => run_tui(&storage, &settings, None)?,
        Some(Commands::Tui { month }) => run_tui(&storage, &settings, month)?,
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Categories) => {
            for category in &settings.categories {
                println!("{}", category);
            }
        }
        Some(Commands::Config) => {
            let paths = storage.paths();
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Ledger directory: {}", paths.ledger_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Categories:      {}", settings.categories.join(", "));
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Show currency:   {}", settings.show_currency);
        }
    }

    Ok(())
}
