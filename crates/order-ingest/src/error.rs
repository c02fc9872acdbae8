//! Error types for order CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an order export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("Input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV structure or encoding problem.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    /// The file has no header row.
    #[error("CSV appears to have no header row: {path}")]
    NoHeader { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
