//! Order rows keyed by column name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One CSV data row, keyed by header name.
///
/// Absent columns read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderRow {
    values: BTreeMap<String, String>,
}

impl OrderRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row by pairing headers with cells. Missing cells are empty;
    /// extra cells are ignored. Later duplicates of a header win.
    pub fn from_cells<H, C>(headers: &[H], cells: &[C]) -> Self
    where
        H: AsRef<str>,
        C: AsRef<str>,
    {
        let mut row = Self::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = cells.get(idx).map(AsRef::as_ref).unwrap_or("");
            row.set(header.as_ref(), value);
        }
        row
    }

    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value for `column`.
    pub fn trimmed(&self, column: &str) -> &str {
        self.get(column).trim()
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// True when every listed column is blank.
    pub fn is_blank<H: AsRef<str>>(&self, headers: &[H]) -> bool {
        headers
            .iter()
            .all(|header| self.trimmed(header.as_ref()).is_empty())
    }

    /// Values in `headers` order, empty where the row has no value.
    pub fn values_for<H: AsRef<str>>(&self, headers: &[H]) -> Vec<String> {
        headers
            .iter()
            .map(|header| self.get(header.as_ref()).to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (key, value) in iter {
            row.set(key, value);
        }
        row
    }
}
