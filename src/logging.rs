//! Diagnostic logging
//!
//! Events go to `expense.log` in the base directory so that the terminal UI is
//! never drawn over. `RUST_LOG` overrides the default `expense_ledger=info`.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber, once per process
pub fn init_tracing(paths: &LedgerPaths) -> Result<(), LedgerError> {
    let mut result: Result<(), LedgerError> = Ok(());

    TRACING_INIT.call_once(|| {
        result = install_subscriber(paths);
    });
    result?;

    tracing::info!(base_dir = %paths.base_dir().display(), "expense ledger started");
    Ok(())
}

fn install_subscriber(paths: &LedgerPaths) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| LedgerError::Io(format!("Failed to open log file: {}", e)))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("expense_ledger=info"));

    // Another subscriber may already be installed (tests); keep it.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_twice_opens_log_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        init_tracing(&paths).unwrap();
        assert!(paths.log_file().exists());

        let other = LedgerPaths::with_base_dir(temp_dir.path().join("other"));
        init_tracing(&other).unwrap();
        assert!(!other.log_file().exists());
    }
}
