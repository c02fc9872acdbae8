//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord};
use order_model::OrderRow;

use super::header::{normalize_cell, normalize_header};
use crate::error::{IngestError, Result};

/// An order export loaded into memory.
#[derive(Debug, Clone, Default)]
pub struct OrderTable {
    /// Normalized header names in file order.
    pub headers: Vec<String>,
    /// Data rows, in file order, keyed by header.
    pub rows: Vec<OrderRow>,
}

impl OrderTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads an order export from disk.
pub fn read_order_csv(path: &Path) -> Result<OrderTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_order_table(file, path)
}

/// Reads an order export from any reader. `path` is only used in errors and logs.
///
/// Rows shorter than the header are padded with empty values; cells beyond
/// the header are dropped. Blank lines are skipped by the CSV reader, and a
/// file with no non-blank header name is [`IngestError::NoHeader`].
pub fn read_order_table<R: Read>(reader: R, path: &Path) -> Result<OrderTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let csv_error = |source: ::csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    // Blank lines are skipped, so a file of blank lines yields an empty record.
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_error)? {
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.len() > headers.len() {
            tracing::debug!(
                path = %path.display(),
                line = record.position().map(::csv::Position::line),
                extra = cells.len() - headers.len(),
                "dropping cells beyond header width"
            );
        }
        rows.push(OrderRow::from_cells(&headers, &cells));
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded order CSV"
    );

    Ok(OrderTable { headers, rows })
}
