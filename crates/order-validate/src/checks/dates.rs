//! order_date parsing.

use order_model::ORDER_DATE;

use super::RowContext;
use crate::normalize::normalize_date;

pub(crate) fn check(ctx: &mut RowContext<'_>) {
    match normalize_date(ctx.raw.get(ORDER_DATE)) {
        Ok(iso) => ctx.cleaned.set(ORDER_DATE, iso),
        Err(message) => ctx.error(ORDER_DATE, message),
    }
}
