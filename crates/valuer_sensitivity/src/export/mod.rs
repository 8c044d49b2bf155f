//! CSV export of the sensitivity table.
//!
//! The grid is the only exported artifact of the system, and its header
//! row and column order are an external contract: downstream scripts parse
//! the file positionally.

use std::io;

use thiserror::Error;

use crate::grid::SensitivityRow;

/// The contractual CSV header, in column order.
pub const CSV_HEADER: [&str; 7] = [
    "adr",
    "occupancy",
    "capRate",
    "revenue",
    "noi",
    "incomeValue",
    "adrValue",
];

/// CSV export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying writer failed.
    #[error("I/O error during export: {0}")]
    Io(#[from] io::Error),

    /// Export buffer held invalid UTF-8.
    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Writes the rows as CSV, header first, to any [`io::Write`].
///
/// The header is emitted even for an empty table, so consumers always see
/// the column contract.
///
/// # Errors
/// - `ExportError::Csv` / `ExportError::Io` from the underlying writer
pub fn write_csv<W: io::Write>(rows: &[SensitivityRow], writer: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        // serialize() only emits the header alongside a record.
        writer.write_record(CSV_HEADER)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serializes the rows to an in-memory CSV string.
///
/// # Errors
/// - Same as [`write_csv`]
pub fn to_csv_string(rows: &[SensitivityRow]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
