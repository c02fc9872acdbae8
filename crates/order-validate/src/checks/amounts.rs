//! Numeric fields: qty and unit_price.

use order_model::{QTY, UNIT_PRICE};

use super::RowContext;
use crate::normalize::{format_price, parse_qty, parse_unit_price};

pub(crate) fn check(ctx: &mut RowContext<'_>) {
    let qty = ctx.value(QTY);
    match parse_qty(qty) {
        Ok(value) if value <= 0 => ctx.error(QTY, "qty must be > 0"),
        Ok(_) => {}
        Err(_) => ctx.error(QTY, format!("qty must be an integer (got '{qty}')")),
    }

    // The cleaned price is rewritten even when it fails the sign check.
    let price = ctx.value(UNIT_PRICE);
    match parse_unit_price(price) {
        Ok(value) => {
            if value < 0.0 {
                ctx.error(UNIT_PRICE, "unit_price must be >= 0");
            }
            ctx.cleaned.set(UNIT_PRICE, format_price(value));
        }
        Err(_) => ctx.error(
            UNIT_PRICE,
            format!("unit_price must be a number (got '{price}')"),
        ),
    }
}
