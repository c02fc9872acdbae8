//! Report generation for order validation runs.
//!
//! - **Text report**: the human-readable summary printed after every run
//! - **Exit decision**: process status derived from finding severities
//! - **Cleaned CSV**: normalized rows for re-import
//! - **JSON report**: findings for machine consumption

mod decision;
mod error;
mod output;
mod text;

pub use decision::{ExitStatus, exit_status};
pub use error::{OutputError, Result};
pub use output::{JsonReport, write_cleaned_csv, write_cleaned_csv_to, write_json_report};
pub use text::{REPORT_TITLE, render_report, write_report};
