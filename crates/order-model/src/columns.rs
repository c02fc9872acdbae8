//! Column names every order export must carry.

use std::collections::HashSet;

pub const ORDER_ID: &str = "order_id";
pub const ORDER_DATE: &str = "order_date";
pub const CUSTOMER_NAME: &str = "customer_name";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";
pub const SKU: &str = "sku";
pub const QTY: &str = "qty";
pub const UNIT_PRICE: &str = "unit_price";

/// Required columns in their canonical order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    ORDER_ID,
    ORDER_DATE,
    CUSTOMER_NAME,
    PHONE,
    EMAIL,
    SKU,
    QTY,
    UNIT_PRICE,
];

/// Header order for re-exported data.
///
/// Keeps the input order and appends any required column the input lacked.
/// Repeated names are written once, at their first position.
pub fn output_headers(headers: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::with_capacity(headers.len() + REQUIRED_COLUMNS.len());
    let candidates = headers
        .iter()
        .map(String::as_str)
        .chain(REQUIRED_COLUMNS.iter().copied());
    for name in candidates {
        if seen.insert(name) {
            ordered.push(name.to_string());
        }
    }
    ordered
}
