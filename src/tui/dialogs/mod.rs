//! Dialog modules for the TUI
//!
//! Contains the transient chart window and the help overlay

pub mod chart;
pub mod help;
