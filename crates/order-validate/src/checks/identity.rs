//! Line-item identity: order_id, sku and duplicate detection.

use std::collections::BTreeSet;

use order_model::{ORDER_ID, SKU};

use super::RowContext;

/// Column label used for duplicate line-item findings.
const LINE_ITEM_COLUMN: &str = "order_id/sku";

/// Remembers every (order_id, sku) pair seen during one run.
#[derive(Debug, Clone, Default)]
pub struct LineItemTracker {
    seen: BTreeSet<(String, String)>,
}

impl LineItemTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a line item. Returns `false` if it was already seen.
    pub fn record(&mut self, order_id: &str, sku: &str) -> bool {
        self.seen.insert((order_id.to_string(), sku.to_string()))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

pub(crate) fn check(ctx: &mut RowContext<'_>, tracker: &mut LineItemTracker) {
    let order_id = ctx.value(ORDER_ID);
    if order_id.is_empty() {
        ctx.error(ORDER_ID, "Missing order_id");
    }

    let sku = ctx.value(SKU);
    if sku.is_empty() {
        ctx.error(SKU, "Missing sku");
    }

    if !order_id.is_empty() && !sku.is_empty() && !tracker.record(order_id, sku) {
        ctx.error(
            LINE_ITEM_COLUMN,
            format!("Duplicate line item for order_id={order_id}, sku={sku}"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_reports_repeats() {
        let mut tracker = LineItemTracker::new();
        assert!(tracker.record("A1", "X"));
        assert!(tracker.record("A1", "Y"));
        assert!(tracker.record("A2", "X"));
        assert!(!tracker.record("A1", "X"));
        assert_eq!(tracker.len(), 3);
    }
}
