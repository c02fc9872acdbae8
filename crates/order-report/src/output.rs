//! Cleaned CSV and JSON report writers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use serde::Serialize;

use order_model::{Finding, OrderRow, output_headers};

use crate::error::{OutputError, Result};

/// Machine-readable summary of a run.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    pub source: String,
    pub errors: usize,
    pub warnings: usize,
    pub findings: &'a [Finding],
}

impl<'a> JsonReport<'a> {
    pub fn new(source: &Path, findings: &'a [Finding]) -> Self {
        Self {
            source: source.display().to_string(),
            errors: findings.iter().filter(|f| f.is_error()).count(),
            warnings: findings.iter().filter(|f| f.is_warning()).count(),
            findings,
        }
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })
}

/// Write cleaned rows to `path`.
///
/// The header is the input header order with any missing required columns
/// appended. Absent values are written as empty cells.
pub fn write_cleaned_csv(path: &Path, headers: &[String], rows: &[OrderRow]) -> Result<()> {
    let file = create(path)?;
    write_cleaned_csv_to(file, path, headers, rows)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote cleaned CSV");
    Ok(())
}

/// Write cleaned rows to any writer. `path` is only used in errors.
pub fn write_cleaned_csv_to<W: Write>(
    writer: W,
    path: &Path,
    headers: &[String],
    rows: &[OrderRow],
) -> Result<()> {
    let csv_error = |source: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let columns = output_headers(headers);
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);
    writer.write_record(&columns).map_err(csv_error)?;
    for row in rows {
        writer
            .write_record(row.values_for(&columns))
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|source| io_error(path, source))
}

/// Write the findings as pretty-printed JSON.
pub fn write_json_report(path: &Path, report: &JsonReport<'_>) -> Result<()> {
    let mut file = create(path)?;
    serde_json::to_writer_pretty(&mut file, report).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(b"\n")
        .and_then(|()| file.flush())
        .map_err(|source| io_error(path, source))?;
    tracing::info!(path = %path.display(), findings = report.findings.len(), "wrote JSON report");
    Ok(())
}

fn io_error(path: &Path, source: io::Error) -> OutputError {
    OutputError::Io {
        path: path.to_path_buf(),
        source,
    }
}
