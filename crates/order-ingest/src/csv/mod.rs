//! CSV reading utilities.

mod header;
mod reader;

pub use header::{normalize_cell, normalize_header};
pub use reader::{OrderTable, read_order_csv, read_order_table};
