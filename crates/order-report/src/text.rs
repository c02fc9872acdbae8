//! Human-readable validation report.

use std::fmt::Write as _;
use std::io;

use order_model::Finding;

pub const REPORT_TITLE: &str = "=== Order CSV Validation Report ===";

/// Render the report for `findings`, in the order they were produced.
pub fn render_report(findings: &[Finding]) -> String {
    let errors = findings.iter().filter(|f| f.is_error()).count();
    let warnings = findings.iter().filter(|f| f.is_warning()).count();

    let mut out = String::new();
    let _ = writeln!(out, "{REPORT_TITLE}");
    let _ = writeln!(out, "Errors: {errors} | Warnings: {warnings}");

    if !findings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Details:");
        for finding in findings {
            let _ = writeln!(
                out,
                "- {:<5} {:<6} col={}: {}",
                finding.severity.as_str(),
                finding.location(),
                finding.column,
                finding.message
            );
        }
    }
    out
}

/// Write the rendered report to `writer`.
pub fn write_report<W: io::Write>(writer: &mut W, findings: &[Finding]) -> io::Result<()> {
    writer.write_all(render_report(findings).as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_has_no_details() {
        let report = render_report(&[]);
        assert_eq!(
            report,
            "=== Order CSV Validation Report ===\nErrors: 0 | Warnings: 0\n"
        );
    }

    #[test]
    fn columns_are_padded() {
        let report = render_report(&[
            Finding::warn(3, "phone", "Missing phone"),
            Finding::file_error("sku", "Missing required column"),
            Finding::error(120, "qty", "qty must be > 0"),
        ]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[1], "Errors: 2 | Warnings: 1");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Details:");
        assert_eq!(lines[4], "- WARN  row 3  col=phone: Missing phone");
        assert_eq!(lines[5], "- ERROR file   col=sku: Missing required column");
        assert_eq!(lines[6], "- ERROR row 120 col=qty: qty must be > 0");
    }
}
