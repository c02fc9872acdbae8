//! Header and cell normalization.

const BOM: char = '\u{feff}';

/// Normalizes a header value: strips a byte-order mark and surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_matches(BOM).trim().to_string()
}

/// Normalizes a data cell by trimming surrounding whitespace.
pub fn normalize_cell(value: &str) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_and_whitespace() {
        assert_eq!(normalize_header("\u{feff}order_id"), "order_id");
        assert_eq!(normalize_header("  sku "), "sku");
        assert_eq!(normalize_header("\u{feff} qty"), "qty");
    }

    #[test]
    fn cell_keeps_inner_spaces() {
        assert_eq!(normalize_cell("  Tan Ah Kow "), "Tan Ah Kow");
    }
}
