//! Whole-file validation.

use std::collections::HashSet;

use order_model::{Finding, OrderRow, REQUIRED_COLUMNS, ValidateOptions, ValidationOutcome};

use crate::checks::identity::LineItemTracker;
use crate::row::{RowOutcome, validate_row};

/// Required columns absent from `headers`, in canonical order.
pub fn missing_required_columns(headers: &[String]) -> Vec<&'static str> {
    let present: HashSet<&str> = headers
        .iter()
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .collect();
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !present.contains(column))
        .collect()
}

/// Validate every row of an export.
///
/// If any required column is missing, only the file-level errors are
/// returned and no rows are cleaned. Otherwise rows are checked in order,
/// numbered from 1, sharing one duplicate tracker.
pub fn validate_orders(
    headers: &[String],
    rows: &[OrderRow],
    options: &ValidateOptions,
) -> ValidationOutcome {
    let _span = tracing::info_span!("validate_orders", rows = rows.len()).entered();

    let missing = missing_required_columns(headers);
    if !missing.is_empty() {
        tracing::warn!(
            missing = ?missing,
            "required columns missing; skipping row checks"
        );
        return ValidationOutcome {
            findings: missing
                .into_iter()
                .map(|column| Finding::file_error(column, "Missing required column"))
                .collect(),
            cleaned_rows: Vec::new(),
        };
    }

    let mut tracker = LineItemTracker::new();
    let mut outcome = ValidationOutcome {
        findings: Vec::new(),
        cleaned_rows: Vec::with_capacity(rows.len()),
    };

    for (idx, row) in rows.iter().enumerate() {
        match validate_row(idx + 1, row, headers, options, &mut tracker) {
            RowOutcome::Skipped(findings) => outcome.findings.extend(findings),
            RowOutcome::Checked { findings, cleaned } => {
                outcome.findings.extend(findings);
                outcome.cleaned_rows.push(cleaned);
            }
        }
    }

    tracing::info!(
        rows = rows.len(),
        cleaned = outcome.cleaned_rows.len(),
        line_items = tracker.len(),
        errors = outcome.error_count(),
        warnings = outcome.warning_count(),
        "validation complete"
    );

    outcome
}
