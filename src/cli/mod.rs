//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod report;

pub use expense::{handle_add_command, AddArgs};
pub use report::{handle_report_command, ChartCommands, ReportCommands};
