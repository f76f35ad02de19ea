//! Storage layer for the expense ledger
//!
//! Provides the append-only CSV ledgers, one file per month, with automatic
//! directory creation.

pub mod csv_io;
pub mod ledger;

pub use csv_io::{append_csv_record, read_csv_records};
pub use ledger::LedgerRepository;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator
pub struct Storage {
    paths: LedgerPaths,
    pub ledgers: LedgerRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledgers: LedgerRepository::new(paths.ledger_dir()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }
}
