//! Configuration options for order validation.

use serde::{Deserialize, Serialize};

/// Options controlling a validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateOptions {
    /// Treat warnings as acceptable.
    ///
    /// Also drops fully blank rows from the cleaned output instead of
    /// running the per-field checks on them.
    pub allow_warnings: bool,
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_warnings(mut self, enable: bool) -> Self {
        self.allow_warnings = enable;
        self
    }
}
