//! Validation rules for order exports.
//!
//! - [`normalize`]: pure field normalizers (phone, date, numbers, email)
//! - [`validate_row`]: all field checks for a single row
//! - [`validate_orders`]: the whole-file run, including the required-column
//!   precondition and duplicate line-item tracking

mod checks;
mod dataset;
pub mod normalize;
mod row;

pub use checks::identity::LineItemTracker;
pub use dataset::{missing_required_columns, validate_orders};
pub use normalize::{
    DATE_FORMATS, PhoneNormalization, format_price, is_valid_email, normalize_date,
    normalize_phone, parse_qty, parse_unit_price,
};
pub use row::{RowOutcome, validate_row};
