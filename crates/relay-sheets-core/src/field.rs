//! Write-side value union
//!
//! Values handed to the writer are one of a closed set of shapes; the
//! writer matches exhaustively on this union instead of sniffing runtime
//! types, so every conversion rule is explicit.

use chrono::{NaiveDate, NaiveDateTime};

/// Format used when a date-time value is written as cell text
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A value to be placed in a cell by the writer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    /// Numeric value; written as a native numeric cell
    Number(f64),
    /// Calendar value; written as a text cell in [`DATETIME_FORMAT`]
    DateTime(NaiveDateTime),
    /// Boolean value; written as a native boolean cell
    Boolean(bool),
    /// Any other value, in its canonical string form; written as text
    Text(String),
    /// Missing value; the cell is left unset
    Null,
}

impl FieldValue {
    /// Check whether this value leaves its cell unset
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        FieldValue::DateTime(dt)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::DateTime(d.and_hms_opt(0, 0, 0).expect("midnight is valid"))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => FieldValue::Null,
        }
    }
}
