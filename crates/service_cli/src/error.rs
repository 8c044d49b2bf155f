//! CLI error handling

use thiserror::Error;

/// Errors surfaced to the CLI user.
///
/// When a computation fails, the CLI prints the error and withholds any
/// partial numeric output rather than displaying a default or stale value.
#[derive(Debug, Error)]
pub enum CliError {
    /// A referenced file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An argument value is outside the supported set.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file could not be parsed.
    #[error("Configuration error in {path}: {message}")]
    Config {
        /// Path of the offending file.
        path: String,
        /// Parser message.
        message: String,
    },

    /// Valuation computation failed.
    #[error(transparent)]
    Valuation(#[from] valuer_core::types::ValuationError),

    /// Grid generation failed.
    #[error(transparent)]
    Grid(#[from] valuer_sensitivity::error::GridError),

    /// CSV export failed.
    #[error(transparent)]
    Export(#[from] valuer_sensitivity::export::ExportError),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
