//! Order CSV ingestion.
//!
//! Loads an export into memory as a header list plus one [`OrderRow`] per
//! data record. Headers and cells are trimmed; a leading UTF-8 byte-order
//! mark is tolerated.
//!
//! [`OrderRow`]: order_model::OrderRow

pub mod csv;
pub mod error;

pub use crate::csv::{OrderTable, normalize_cell, normalize_header, read_order_csv, read_order_table};
pub use error::{IngestError, Result};
