//! Process exit decision.

use order_model::Finding;

/// Process exit status for a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    /// No findings, or only warnings that were allowed.
    Clean,
    /// Input could not be read or output could not be written.
    Failure,
    /// Warnings present and not allowed.
    Warnings,
    /// At least one error.
    Errors,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Clean => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Warnings => 2,
            ExitStatus::Errors => 3,
        }
    }
}

/// Derive the exit status from findings.
///
/// Errors always fail the run; `allow_warnings` only relaxes warnings.
pub fn exit_status(findings: &[Finding], allow_warnings: bool) -> ExitStatus {
    if findings.iter().any(Finding::is_error) {
        ExitStatus::Errors
    } else if !allow_warnings && findings.iter().any(Finding::is_warning) {
        ExitStatus::Warnings
    } else {
        ExitStatus::Clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_win_over_allow_warnings() {
        let findings = vec![
            Finding::warn(1, "phone", "Missing phone"),
            Finding::error(2, "qty", "qty must be > 0"),
        ];
        assert_eq!(exit_status(&findings, true), ExitStatus::Errors);
        assert_eq!(exit_status(&findings, false).code(), 3);
    }

    #[test]
    fn warnings_respect_flag() {
        let findings = vec![Finding::warn(1, "phone", "Missing phone")];
        assert_eq!(exit_status(&findings, false), ExitStatus::Warnings);
        assert_eq!(exit_status(&findings, true), ExitStatus::Clean);
    }

    #[test]
    fn no_findings_is_clean() {
        assert_eq!(exit_status(&[], false).code(), 0);
    }
}
