//! Single-row validation.

use order_model::{Finding, OrderRow, ROW_WIDE_COLUMN, ValidateOptions};

use crate::checks::identity::LineItemTracker;
use crate::checks::{RowContext, run_all};

/// What validating one row produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Blank row dropped because warnings are allowed. Carries the `Empty row` warning.
    Skipped(Vec<Finding>),
    /// Row went through every check; `cleaned` belongs in the output even
    /// when `findings` contains errors.
    Checked {
        findings: Vec<Finding>,
        cleaned: OrderRow,
    },
}

impl RowOutcome {
    pub fn findings(&self) -> &[Finding] {
        match self {
            RowOutcome::Skipped(findings) => findings,
            RowOutcome::Checked { findings, .. } => findings,
        }
    }

    pub fn cleaned(&self) -> Option<&OrderRow> {
        match self {
            RowOutcome::Skipped(_) => None,
            RowOutcome::Checked { cleaned, .. } => Some(cleaned),
        }
    }
}

/// Validate one data row.
///
/// `row_number` is the 1-based data row index used in findings. `tracker`
/// carries the line items seen earlier in the same run.
pub fn validate_row(
    row_number: usize,
    raw: &OrderRow,
    headers: &[String],
    options: &ValidateOptions,
    tracker: &mut LineItemTracker,
) -> RowOutcome {
    let mut ctx = RowContext::new(row_number, raw);

    if raw.is_blank(headers) {
        ctx.warn(ROW_WIDE_COLUMN, "Empty row");
        if options.allow_warnings {
            tracing::debug!(row = row_number, "skipping empty row");
            return RowOutcome::Skipped(ctx.findings);
        }
    }

    run_all(&mut ctx, tracker);

    tracing::debug!(
        row = row_number,
        findings = ctx.findings.len(),
        "validated row"
    );

    RowOutcome::Checked {
        findings: ctx.findings,
        cleaned: ctx.cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_model::{REQUIRED_COLUMNS, Severity};

    fn headers() -> Vec<String> {
        REQUIRED_COLUMNS.iter().map(|c| (*c).to_string()).collect()
    }

    fn good_row() -> OrderRow {
        [
            ("order_id", "A1"),
            ("order_date", "2024-03-01"),
            ("customer_name", "Tan Ah Kow"),
            ("phone", "91234567"),
            ("email", "tan@example.sg"),
            ("sku", "X"),
            ("qty", "2"),
            ("unit_price", "9.50"),
        ]
        .into_iter()
        .collect()
    }

    fn messages(outcome: &RowOutcome) -> Vec<String> {
        outcome
            .findings()
            .iter()
            .map(|f| f.message.clone())
            .collect()
    }

    #[test]
    fn clean_row_has_no_findings() {
        let mut tracker = LineItemTracker::new();
        let outcome = validate_row(1, &good_row(), &headers(), &ValidateOptions::new(), &mut tracker);
        assert!(outcome.findings().is_empty());
        assert_eq!(outcome.cleaned(), Some(&good_row()));
    }

    #[test]
    fn checks_do_not_short_circuit() {
        let mut row = good_row();
        row.set("order_id", "");
        row.set("sku", " ");
        row.set("order_date", "31/31/2024");
        row.set("email", "nope");
        row.set("customer_name", "");
        row.set("phone", "");
        row.set("qty", "0");
        row.set("unit_price", "-2");

        let mut tracker = LineItemTracker::new();
        let outcome = validate_row(4, &row, &headers(), &ValidateOptions::new(), &mut tracker);
        assert_eq!(
            messages(&outcome),
            vec![
                "Missing order_id",
                "Missing sku",
                "Unparseable date '31/31/2024' (expected YYYY-MM-DD or DD/MM/YYYY etc.)",
                "Invalid email 'nope'",
                "Missing customer_name",
                "Missing phone",
                "qty must be > 0",
                "unit_price must be >= 0",
            ]
        );
        assert!(outcome.findings().iter().all(|f| f.row == 4));
        assert_eq!(outcome.findings()[5].severity, Severity::Warn);
        assert!(tracker.is_empty());

        // negative prices are still reformatted
        let cleaned = outcome.cleaned().expect("row kept");
        assert_eq!(cleaned.get("unit_price"), "-2.00");
        assert_eq!(cleaned.get("order_date"), "31/31/2024");
    }

    #[test]
    fn cleaned_row_carries_normalized_fields() {
        let mut row = good_row();
        row.set("order_date", "03/04/2024");
        row.set("phone", "+65 9123-4567");
        row.set("unit_price", "9");
        row.set("notes", "gift wrap");

        let mut tracker = LineItemTracker::new();
        let outcome = validate_row(1, &row, &headers(), &ValidateOptions::new(), &mut tracker);
        assert_eq!(
            messages(&outcome),
            vec!["Normalized phone from '+65 9123-4567' -> '91234567'"]
        );
        let cleaned = outcome.cleaned().expect("row kept");
        assert_eq!(cleaned.get("order_date"), "2024-04-03");
        assert_eq!(cleaned.get("phone"), "91234567");
        assert_eq!(cleaned.get("unit_price"), "9.00");
        assert_eq!(cleaned.get("notes"), "gift wrap");
    }

    #[test]
    fn non_numeric_amounts() {
        let mut row = good_row();
        row.set("qty", "abc");
        row.set("unit_price", "free");

        let mut tracker = LineItemTracker::new();
        let outcome = validate_row(2, &row, &headers(), &ValidateOptions::new(), &mut tracker);
        assert_eq!(
            messages(&outcome),
            vec![
                "qty must be an integer (got 'abc')",
                "unit_price must be a number (got 'free')",
            ]
        );
        assert_eq!(outcome.cleaned().expect("row kept").get("unit_price"), "free");
    }

    #[test]
    fn empty_row_is_checked_when_warnings_not_allowed() {
        let row = OrderRow::new();
        let mut tracker = LineItemTracker::new();
        let outcome = validate_row(3, &row, &headers(), &ValidateOptions::new(), &mut tracker);
        let findings = outcome.findings();
        assert_eq!(findings[0].column, "*");
        assert_eq!(findings[0].message, "Empty row");
        assert!(findings.len() > 1);
        assert!(outcome.cleaned().is_some());
    }

    #[test]
    fn empty_row_is_skipped_when_warnings_allowed() {
        let row = OrderRow::from_cells(&headers(), &["", "", "", "", "", "", "", ""]);
        let mut tracker = LineItemTracker::new();
        let options = ValidateOptions::new().with_allow_warnings(true);
        let outcome = validate_row(3, &row, &headers(), &options, &mut tracker);
        assert_eq!(
            outcome,
            RowOutcome::Skipped(vec![Finding::warn(3, "*", "Empty row")])
        );
    }
}
