pub mod columns;
pub mod finding;
pub mod options;
pub mod outcome;
pub mod row;

pub use columns::{
    CUSTOMER_NAME, EMAIL, ORDER_DATE, ORDER_ID, PHONE, QTY, REQUIRED_COLUMNS, SKU, UNIT_PRICE,
    output_headers,
};
pub use finding::{Finding, ROW_WIDE_COLUMN, Severity};
pub use options::ValidateOptions;
pub use outcome::ValidationOutcome;
pub use row::OrderRow;
