//! Cell value types and display-text rules

use std::fmt;

use chrono::{NaiveDate, TimeDelta};

/// Display text used for cells holding an error code.
///
/// The text is a single fixed sentinel regardless of which error the cell
/// holds; the precise code is still carried on [`CellError`] for callers
/// that need it.
pub const ERROR_TEXT: &str = "ERROR..CHECK DATA";

/// Serial date numbers count days from this epoch (the usual 1900 date
/// system, with the epoch shifted two days to absorb the historical
/// lotus-1-2-3 leap-year quirk).
const SERIAL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Represents the value stored in a cell
///
/// Exactly one variant is active per cell. An *absent* cell is not
/// represented here at all - sparse rows simply have no entry for it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Present but empty cell
    Blank,

    /// Boolean value
    Boolean(bool),

    /// Numeric value; `is_date` is set when the source cell carried a
    /// date format (the number is then a serial date)
    Number {
        /// The raw numeric value (serial date number when `is_date`)
        value: f64,
        /// Whether the cell was date-formatted at the source
        is_date: bool,
    },

    /// String value
    Text(String),

    /// Formula with the result memoized by the producing application.
    ///
    /// The engine never evaluates `source`; display text always comes from
    /// `cached`.
    Formula {
        /// Original formula text, without a leading `=`
        source: String,
        /// Last result stored alongside the formula
        cached: CachedResult,
    },

    /// Error value (`#DIV/0!`, `#REF!`, ...)
    Error(CellError),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Create a new plain numeric value
    pub fn number(value: f64) -> Self {
        CellValue::Number {
            value,
            is_date: false,
        }
    }

    /// Create a new date value from a serial date number
    pub fn date(serial: f64) -> Self {
        CellValue::Number {
            value: serial,
            is_date: true,
        }
    }

    /// Create a new formula value with its cached result
    pub fn formula<S: Into<String>>(source: S, cached: CachedResult) -> Self {
        CellValue::Formula {
            source: source.into(),
            cached,
        }
    }

    /// Check if the cell is blank
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula { .. })
    }

    /// Check if the cell contains an error
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error(_))
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number { value, .. } => Some(*value),
            CellValue::Formula {
                cached: CachedResult::Number(n),
                ..
            } => Some(*n),
            _ => None,
        }
    }

    /// Get the formula text if this is a formula cell
    pub fn formula_source(&self) -> Option<&str> {
        match self {
            CellValue::Formula { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Render the cell as display text.
    ///
    /// - date-formatted numbers render as `yyyy-MM-dd`
    /// - plain numbers render with 0 decimal digits, rounding half up
    /// - text renders verbatim, booleans as `true`/`false`
    /// - formulas render their cached result, never the source text
    /// - blanks render as the empty string, errors as [`ERROR_TEXT`]
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Blank => String::new(),
            CellValue::Boolean(b) => b.to_string(),
            CellValue::Number {
                value,
                is_date: true,
            } => format_serial_date(*value),
            CellValue::Number {
                value,
                is_date: false,
            } => format_rounded(*value),
            CellValue::Text(s) => s.clone(),
            CellValue::Formula { cached, .. } => cached.display_text(),
            CellValue::Error(_) => ERROR_TEXT.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// Result memoized alongside a formula by the producing application
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CachedResult {
    /// Numeric result
    Number(f64),
    /// Textual result
    Text(String),
}

impl CachedResult {
    /// Render the cached result as display text.
    ///
    /// Text results are taken verbatim; numeric results are stringified,
    /// with integral values printed without a trailing `.0`.
    pub fn display_text(&self) -> String {
        match self {
            CachedResult::Number(n) => format_plain(*n),
            CachedResult::Text(s) => s.clone(),
        }
    }
}

/// Spreadsheet error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellError {
    /// #DIV/0! - Division by zero
    Div0,
    /// #N/A - Value not available
    Na,
    /// #NAME? - Unrecognized formula name
    Name,
    /// #NULL! - Incorrect range operator
    Null,
    /// #NUM! - Invalid numeric value
    Num,
    /// #REF! - Invalid cell reference
    Ref,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #GETTING_DATA - External data is loading
    GettingData,
}

impl CellError {
    /// Get the spreadsheet code string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Div0 => "#DIV/0!",
            CellError::Na => "#N/A",
            CellError::Name => "#NAME?",
            CellError::Null => "#NULL!",
            CellError::Num => "#NUM!",
            CellError::Ref => "#REF!",
            CellError::Value => "#VALUE!",
            CellError::GettingData => "#GETTING_DATA",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Round to the nearest integer, with ties going away from zero.
fn round_half_up(value: f64) -> f64 {
    if value < 0.0 {
        -((-value) + 0.5).floor()
    } else {
        (value + 0.5).floor()
    }
}

/// Format a plain number with 0 decimal digits, rounding half up.
fn format_rounded(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    format!("{:.0}", round_half_up(value))
}

/// Stringify a number, printing integral values without a trailing `.0`.
fn format_plain(value: f64) -> String {
    if value.is_finite() && value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Format a serial date number as `yyyy-MM-dd`.
///
/// Serials that cannot be mapped to a calendar date (far out of range)
/// fall back to plain numeric formatting rather than failing the read.
fn format_serial_date(serial: f64) -> String {
    match serial_to_date(serial) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => format_rounded(serial),
    }
}

fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    let (y, m, d) = SERIAL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d)?;
    let days = TimeDelta::try_days(serial.floor() as i64)?;
    epoch.checked_add_signed(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_numbers_round_half_up() {
        assert_eq!(CellValue::number(30.0).display_text(), "30");
        assert_eq!(CellValue::number(2.4).display_text(), "2");
        assert_eq!(CellValue::number(2.5).display_text(), "3");
        assert_eq!(CellValue::number(-2.5).display_text(), "-3");
        assert_eq!(CellValue::number(0.0).display_text(), "0");
    }

    #[test]
    fn dates_render_iso() {
        // 45292 days after the epoch is 2024-01-01
        assert_eq!(CellValue::date(45292.0).display_text(), "2024-01-01");
        // time-of-day fraction does not affect the date
        assert_eq!(CellValue::date(45292.75).display_text(), "2024-01-01");
    }

    #[test]
    fn text_and_booleans() {
        assert_eq!(CellValue::text("hello").display_text(), "hello");
        assert_eq!(CellValue::Boolean(true).display_text(), "true");
        assert_eq!(CellValue::Boolean(false).display_text(), "false");
        assert_eq!(CellValue::Blank.display_text(), "");
    }

    #[test]
    fn formulas_render_cached_results() {
        let sum = CellValue::formula("1+2", CachedResult::Number(3.0));
        assert_eq!(sum.display_text(), "3");

        let avg = CellValue::formula("AVERAGE(A1:A2)", CachedResult::Number(2.5));
        assert_eq!(avg.display_text(), "2.5");

        let concat = CellValue::formula("A1&B1", CachedResult::Text("ab".into()));
        assert_eq!(concat.display_text(), "ab");
    }

    #[test]
    fn errors_render_the_sentinel() {
        assert_eq!(CellValue::Error(CellError::Div0).display_text(), ERROR_TEXT);
        assert_eq!(CellValue::Error(CellError::Ref).display_text(), ERROR_TEXT);
        assert_eq!(CellError::Div0.as_str(), "#DIV/0!");
    }

    #[test]
    fn as_number_sees_cached_results() {
        assert_eq!(CellValue::number(1.5).as_number(), Some(1.5));
        let f = CellValue::formula("1+2", CachedResult::Number(3.0));
        assert_eq!(f.as_number(), Some(3.0));
        assert_eq!(CellValue::text("x").as_number(), None);
    }
}
