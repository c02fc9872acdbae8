//! End-to-end run: read, validate, report, write outputs.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use order_ingest::{IngestError, OrderTable, read_order_csv};
use order_model::{ValidateOptions, ValidationOutcome};
use order_report::{
    ExitStatus, JsonReport, exit_status, write_cleaned_csv, write_json_report, write_report,
};
use order_validate::validate_orders;

use crate::logging::redact_value;

/// Inputs for one validator run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub csv_path: PathBuf,
    pub out: Option<PathBuf>,
    pub json_report: Option<PathBuf>,
    pub allow_warnings: bool,
}

impl RunOptions {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            ..Self::default()
        }
    }

    fn validate_options(&self) -> ValidateOptions {
        ValidateOptions::new().with_allow_warnings(self.allow_warnings)
    }
}

/// Run the validator, writing the report to `stdout`.
///
/// Fatal problems (missing or unreadable input, failed writes) are reported
/// on stderr and map to [`ExitStatus::Failure`].
pub fn run<W: Write>(options: &RunOptions, stdout: &mut W) -> ExitStatus {
    let _span = tracing::info_span!("run", path = %options.csv_path.display()).entered();

    let table = match load(options) {
        Ok(table) => table,
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "input could not be loaded");
            eprintln!("{error:#}");
            return ExitStatus::Failure;
        }
    };

    let outcome = validate_orders(&table.headers, &table.rows, &options.validate_options());
    log_findings(&outcome);

    if let Err(error) = write_report(stdout, &outcome.findings) {
        eprintln!("Failed to write report: {error}");
        return ExitStatus::Failure;
    }

    if let Err(error) = write_outputs(options, &table, &outcome, stdout) {
        tracing::error!(error = %format!("{error:#}"), "output could not be written");
        eprintln!("{error:#}");
        return ExitStatus::Failure;
    }

    let status = exit_status(&outcome.findings, options.allow_warnings);
    tracing::info!(exit_code = status.code(), "run finished");
    status
}

fn load(options: &RunOptions) -> Result<OrderTable> {
    match read_order_csv(&options.csv_path) {
        Ok(table) => Ok(table),
        // Already reads "Input file not found: <path>".
        Err(error @ IngestError::FileNotFound { .. }) => Err(error.into()),
        Err(error) => Err(error).context("Failed to read CSV"),
    }
}

fn write_outputs<W: Write>(
    options: &RunOptions,
    table: &OrderTable,
    outcome: &ValidationOutcome,
    stdout: &mut W,
) -> Result<()> {
    if let Some(path) = &options.out {
        write_cleaned_csv(path, &table.headers, &outcome.cleaned_rows)
            .context("Failed to write cleaned CSV")?;
        writeln!(stdout, "\nWrote cleaned CSV: {}", path.display())
            .context("Failed to write report")?;
    }
    if let Some(path) = &options.json_report {
        let report = JsonReport::new(&options.csv_path, &outcome.findings);
        write_json_report(path, &report).context("Failed to write JSON report")?;
        writeln!(stdout, "Wrote JSON report: {}", path.display())
            .context("Failed to write report")?;
    }
    Ok(())
}

fn log_findings(outcome: &ValidationOutcome) {
    for finding in &outcome.findings {
        tracing::debug!(
            severity = %finding.severity,
            row = finding.row,
            column = %finding.column,
            message = redact_value(&finding.message),
            "finding"
        );
    }
}
