use serde::Serialize;

use crate::finding::Finding;
use crate::row::OrderRow;

/// Everything a validation run produces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationOutcome {
    pub findings: Vec<Finding>,
    #[serde(skip)]
    pub cleaned_rows: Vec<OrderRow>,
}

impl ValidationOutcome {
    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_warning()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    pub fn has_warnings(&self) -> bool {
        self.findings.iter().any(Finding::is_warning)
    }
}
