//! Display formatting for terminal output
//!
//! Formats summaries and charts for the CLI and the form's result label.

pub mod chart;
pub mod summary;

pub use chart::{format_bar, format_bar_chart};
pub use summary::{
    format_breakdown_table, format_category_total, format_total, NO_LEDGER_CATEGORY,
    NO_LEDGER_TOTAL,
};
