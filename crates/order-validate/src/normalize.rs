//! Field normalizers.
//!
//! Each function takes a raw cell and returns its canonical form, or the
//! message describing why it could not be normalized.

use std::num::{IntErrorKind, ParseFloatError, ParseIntError};
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Accepted spreadsheet date layouts, tried in order.
///
/// Day-first is tried before month-first, so `03/04/2024` reads as 3 April.
pub const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%m/%d/%Y", "%Y/%m/%d"];

/// Exact shape of each entry in [`DATE_FORMATS`]: four-digit years, one or
/// two digit days and months, no signs or padding.
const DATE_SHAPES: [&str; 5] = [
    r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$",
    r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$",
    r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{4}$",
    r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$",
    r"^[0-9]{4}/[0-9]{1,2}/[0-9]{1,2}$",
];

/// Canonical output layout for dates.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Leading digits of Singapore landline and mobile numbers.
const SG_LEADING_DIGITS: [char; 3] = ['6', '8', '9'];

const SG_COUNTRY_CODE: &str = "65";
const SG_LOCAL_LENGTH: usize = 8;

static DATE_LAYOUTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    DATE_SHAPES
        .iter()
        .zip(DATE_FORMATS)
        .map(|(shape, format)| (Regex::new(shape).expect("Invalid date shape regex"), format))
        .collect()
});

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex"));

/// Result of phone normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNormalization {
    /// Value to write back to the cleaned row.
    pub value: String,
    /// Advisory message, if the value was rewritten or could not be normalized.
    pub warning: Option<String>,
}

impl PhoneNormalization {
    fn unchanged(value: &str) -> Self {
        Self {
            value: value.to_string(),
            warning: None,
        }
    }

    fn with_warning(value: impl Into<String>, warning: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            warning: Some(warning.into()),
        }
    }
}

/// Normalize a Singapore phone number to its 8-digit local form.
///
/// Separators (whitespace, hyphens, parentheses) and a `+65`/`65` country
/// code are removed. Numbers that do not end up as 8 digits starting with
/// 6, 8 or 9 are returned as given, with a warning.
pub fn normalize_phone(raw: &str) -> PhoneNormalization {
    let original = raw.trim();
    if original.is_empty() {
        return PhoneNormalization::unchanged(original);
    }

    let stripped: String = original
        .chars()
        .filter(|ch| !(ch.is_whitespace() || matches!(ch, '-' | '(' | ')')))
        .collect();

    let local = if let Some(rest) = stripped.strip_prefix("+65") {
        rest
    } else if stripped.starts_with(SG_COUNTRY_CODE) && stripped.chars().count() > SG_LOCAL_LENGTH
    {
        &stripped[SG_COUNTRY_CODE.len()..]
    } else {
        stripped.as_str()
    };

    if is_sg_local_number(local) {
        if local == original {
            return PhoneNormalization::unchanged(local);
        }
        return PhoneNormalization::with_warning(
            local,
            format!("Normalized phone from '{original}' -> '{local}'"),
        );
    }

    if local.chars().any(|ch| ch.is_ascii_digit()) {
        PhoneNormalization::with_warning(
            original,
            "Phone not normalized (non-SG or unexpected format)",
        )
    } else {
        PhoneNormalization::with_warning(original, "Phone contains no digits")
    }
}

fn is_sg_local_number(value: &str) -> bool {
    value.len() == SG_LOCAL_LENGTH
        && value.chars().all(|ch| ch.is_ascii_digit())
        && value.starts_with(SG_LEADING_DIGITS)
}

/// Parse an order date into `YYYY-MM-DD`.
///
/// Returns the error message for the finding on failure.
pub fn normalize_date(raw: &str) -> Result<String, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err("Missing order_date".to_string());
    }
    DATE_LAYOUTS
        .iter()
        .filter(|(shape, _)| shape.is_match(value))
        .filter_map(|(_, format)| NaiveDate::parse_from_str(value, format).ok())
        .find(|date| date.year() >= 1)
        .map(|date| date.format(ISO_DATE_FORMAT).to_string())
        .ok_or_else(|| {
            format!("Unparseable date '{value}' (expected YYYY-MM-DD or DD/MM/YYYY etc.)")
        })
}

/// True for `local@domain.tld` shaped addresses.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Parse a quantity as a whole number.
///
/// Integers outside the `i128` range saturate to its bounds, so they keep
/// their sign for the positivity check.
pub fn parse_qty(raw: &str) -> Result<i128, ParseIntError> {
    match raw.trim().parse::<i128>() {
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(i128::MAX),
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => Ok(i128::MIN),
        parsed => parsed,
    }
}

/// Parse a unit price as a decimal number.
pub fn parse_unit_price(raw: &str) -> Result<f64, ParseFloatError> {
    raw.trim().parse::<f64>()
}

/// Render a price with exactly two decimals.
pub fn format_price(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_with_country_code_is_normalized() {
        let result = normalize_phone("+65 9123-4567");
        assert_eq!(result.value, "91234567");
        assert_eq!(
            result.warning.as_deref(),
            Some("Normalized phone from '+65 9123-4567' -> '91234567'")
        );
    }

    #[test]
    fn phone_already_normal_has_no_warning() {
        let result = normalize_phone(" 61234567 ");
        assert_eq!(result.value, "61234567");
        assert_eq!(result.warning, None);
    }

    #[test]
    fn bare_country_code_only_stripped_when_long() {
        // 65 prefix on a 10-digit string is a country code
        let result = normalize_phone("6581234567");
        assert_eq!(result.value, "81234567");
        assert!(result.warning.is_some());

        // an 8-digit number that happens to start with 65 stays intact
        let result = normalize_phone("65123456");
        assert_eq!(result.value, "65123456");
        assert_eq!(result.warning, None);
    }

    #[test]
    fn parentheses_are_separators() {
        let result = normalize_phone("(65) 8123 4567");
        assert_eq!(result.value, "81234567");
    }

    #[test]
    fn foreign_numbers_are_left_alone() {
        let result = normalize_phone("+1 415 555 0100");
        assert_eq!(result.value, "+1 415 555 0100");
        assert_eq!(
            result.warning.as_deref(),
            Some("Phone not normalized (non-SG or unexpected format)")
        );

        // wrong leading digit
        let result = normalize_phone("71234567");
        assert_eq!(result.value, "71234567");
        assert!(result.warning.is_some());
    }

    #[test]
    fn phone_without_digits() {
        let result = normalize_phone("n/a");
        assert_eq!(result.value, "n/a");
        assert_eq!(result.warning.as_deref(), Some("Phone contains no digits"));
    }

    #[test]
    fn blank_phone_is_passed_through() {
        assert_eq!(normalize_phone("   "), PhoneNormalization::unchanged(""));
    }

    #[test]
    fn date_formats_in_priority_order() {
        assert_eq!(normalize_date("2024-02-29").unwrap(), "2024-02-29");
        assert_eq!(normalize_date("03/04/2024").unwrap(), "2024-04-03");
        assert_eq!(normalize_date("03-04-2024").unwrap(), "2024-04-03");
        // day 25 cannot be a month, so month-first applies
        assert_eq!(normalize_date("12/25/2024").unwrap(), "2024-12-25");
        assert_eq!(normalize_date("2024/12/25").unwrap(), "2024-12-25");
    }

    #[test]
    fn date_errors() {
        assert_eq!(normalize_date("  ").unwrap_err(), "Missing order_date");
        assert_eq!(
            normalize_date("2024-02-30").unwrap_err(),
            "Unparseable date '2024-02-30' (expected YYYY-MM-DD or DD/MM/YYYY etc.)"
        );
        assert!(normalize_date("yesterday").is_err());
    }

    #[test]
    fn dates_must_match_layout_exactly() {
        for raw in ["01/02/24", "+2024-01-05", "0000-01-01", "2024- 1- 5", "12024-01-05"] {
            assert_eq!(
                normalize_date(raw).unwrap_err(),
                format!("Unparseable date '{raw}' (expected YYYY-MM-DD or DD/MM/YYYY etc.)"),
                "{raw} should be rejected"
            );
        }
        // single-digit day and month are still fine
        assert_eq!(normalize_date("2024-1-5").unwrap(), "2024-01-05");
        assert_eq!(normalize_date("5/1/2024").unwrap(), "2024-01-05");
        assert_eq!(normalize_date(" 0001-01-01 ").unwrap(), "0001-01-01");
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("ops@dreamcore.sg"));
        assert!(is_valid_email("a.b+c@mail.example.com"));
        assert!(!is_valid_email("ops@dreamcore"));
        assert!(!is_valid_email("ops dreamcore@x.sg"));
        assert!(!is_valid_email("a@b@c.sg"));
        assert!(!is_valid_email("@x.sg"));
    }

    #[test]
    fn numeric_parsing() {
        assert_eq!(parse_qty("3").unwrap(), 3);
        assert_eq!(parse_qty("+3").unwrap(), 3);
        assert!(parse_qty("3.0").is_err());
        assert!(parse_qty("abc").is_err());
        assert_eq!(parse_qty("99999999999999999999999999999999999999999").unwrap(), i128::MAX);
        assert_eq!(parse_qty("-99999999999999999999999999999999999999999").unwrap(), i128::MIN);
        assert_eq!(parse_unit_price("9").unwrap(), 9.0);
        assert!(parse_unit_price("").is_err());
        assert_eq!(format_price(9.0), "9.00");
        assert_eq!(format_price(19.999), "20.00");
        assert_eq!(format_price(-1.5), "-1.50");
    }
}
