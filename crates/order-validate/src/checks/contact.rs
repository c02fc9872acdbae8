//! Customer contact fields: email, customer_name and phone.

use order_model::{CUSTOMER_NAME, EMAIL, PHONE};

use super::RowContext;
use crate::normalize::{is_valid_email, normalize_phone};

pub(crate) fn check(ctx: &mut RowContext<'_>) {
    let email = ctx.value(EMAIL);
    if email.is_empty() {
        ctx.error(EMAIL, "Missing email");
    } else if !is_valid_email(email) {
        ctx.error(EMAIL, format!("Invalid email '{email}'"));
    }

    if ctx.value(CUSTOMER_NAME).is_empty() {
        ctx.error(CUSTOMER_NAME, "Missing customer_name");
    }

    // Phone is optional, so a blank value only warns.
    let phone = ctx.value(PHONE);
    if phone.is_empty() {
        ctx.warn(PHONE, "Missing phone");
        return;
    }
    let normalized = normalize_phone(phone);
    ctx.cleaned.set(PHONE, normalized.value);
    if let Some(warning) = normalized.warning {
        ctx.warn(PHONE, warning);
    }
}
