//! CSV file I/O helpers
//!
//! Ledger files are append-only: the header is written once when the file is
//! created and every later write appends rows without touching earlier ones.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

/// Append one record to a CSV file
///
/// Creates the file (and its parent directory) with a header row when it does
/// not exist yet. Returns `true` when the file was newly created.
pub fn append_csv_record<T, P>(path: P, record: &T) -> Result<bool, LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let created = !path.exists();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = WriterBuilder::new().has_headers(created).from_writer(file);

    writer
        .serialize(record)
        .map_err(|e| LedgerError::Csv(format!("Failed to write {}: {}", path.display(), e)))?;

    writer
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(created)
}

/// Read every record of a headed CSV file, returning `None` if it doesn't exist
pub fn read_csv_records<T, P>(path: P) -> Result<Option<Vec<T>>, LedgerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize().enumerate() {
        let record: T = row.map_err(|e| {
            LedgerError::Csv(format!(
                "Failed to parse {} at row {}: {}",
                path.display(),
                index + 1,
                e
            ))
        })?;
        records.push(record);
    }

    Ok(Some(records))
}
