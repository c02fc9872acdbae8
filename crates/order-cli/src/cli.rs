//! CLI argument definitions for the order validator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "order-validator",
    version,
    about = "Validate order CSV exports before importing",
    long_about = "Validate order CSV exports before they are imported downstream.\n\n\
                  Prints a report of errors and warnings, optionally writes a cleaned CSV,\n\
                  and exits 0 (clean), 1 (unreadable input or output failure),\n\
                  2 (warnings) or 3 (errors)."
)]
pub struct Cli {
    /// Path to the input CSV.
    #[arg(value_name = "CSV_PATH")]
    pub csv_path: PathBuf,

    /// Write a cleaned CSV to this path.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Do not fail (exit 2) on warnings.
    ///
    /// Errors still exit 3. Fully blank rows are dropped from the cleaned
    /// output instead of being checked field by field.
    #[arg(long = "allow-warnings")]
    pub allow_warnings: bool,

    /// Write the findings as JSON to this path.
    #[arg(long = "json-report", value_name = "PATH")]
    pub json_report: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Include customer values (emails, phones, names) in log output.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
