use std::fmt;

use serde::{Deserialize, Serialize};

/// Column marker for findings that concern the whole row.
pub const ROW_WIDE_COLUMN: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Blocks import.
    Error,
    /// Should be reviewed; blocks import unless warnings are allowed.
    Warn,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation event.
///
/// `row` is 0 for file-level findings, otherwise the 1-based position of the
/// data row (header excluded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub row: usize,
    pub column: String,
    pub message: String,
}

impl Finding {
    pub fn new(
        severity: Severity,
        row: usize,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            row,
            column: column.into(),
            message: message.into(),
        }
    }

    pub fn error(row: usize, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, row, column, message)
    }

    pub fn warn(row: usize, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warn, row, column, message)
    }

    pub fn file_error(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, 0, column, message)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warn
    }

    pub fn is_file_level(&self) -> bool {
        self.row == 0
    }

    /// `file` for file-level findings, `row <n>` otherwise.
    pub fn location(&self) -> String {
        if self.is_file_level() {
            "file".to_string()
        } else {
            format!("row {}", self.row)
        }
    }
}
