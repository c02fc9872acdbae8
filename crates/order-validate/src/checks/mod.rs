//! Per-row check modules.
//!
//! Each module covers a group of fields. They run in a fixed order and never
//! short-circuit each other, so one row can collect many findings.

mod amounts;
mod contact;
mod dates;
pub mod identity;

use order_model::{Finding, OrderRow};

use self::identity::LineItemTracker;

/// Working state for one row while its checks run.
pub(crate) struct RowContext<'a> {
    pub row: usize,
    pub raw: &'a OrderRow,
    pub cleaned: OrderRow,
    pub findings: Vec<Finding>,
}

impl<'a> RowContext<'a> {
    pub fn new(row: usize, raw: &'a OrderRow) -> Self {
        Self {
            row,
            raw,
            cleaned: raw.clone(),
            findings: Vec::new(),
        }
    }

    /// Trimmed raw value.
    pub fn value(&self, column: &str) -> &'a str {
        self.raw.trimmed(column)
    }

    pub fn error(&mut self, column: &str, message: impl Into<String>) {
        self.findings.push(Finding::error(self.row, column, message));
    }

    pub fn warn(&mut self, column: &str, message: impl Into<String>) {
        self.findings.push(Finding::warn(self.row, column, message));
    }
}

/// Run all field checks on a row.
pub(crate) fn run_all(ctx: &mut RowContext<'_>, tracker: &mut LineItemTracker) {
    // 1. order_id, sku and duplicate line items
    identity::check(ctx, tracker);

    // 2. order_date parsing
    dates::check(ctx);

    // 3. email, customer_name and phone
    contact::check(ctx);

    // 4. qty and unit_price
    amounts::check(ctx);
}
