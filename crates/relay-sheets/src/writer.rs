//! Title-indexed writer

use std::collections::HashMap;
use std::path::Path;

use rust_xlsxwriter::{Format, Worksheet as XlsxWorksheet};

use relay_sheets_core::{FieldValue, StyleRole, StyleSet, TitleOrder, DATETIME_FORMAT};

use crate::codec::Destination;
use crate::error::Result;

/// Width applied to every title column
const COLUMN_WIDTH: f64 = 15.0;

/// One body row: values keyed by header title
pub type RowValues = HashMap<String, FieldValue>;

/// Write a new workbook with a header row and styled body rows.
///
/// Row values are placed by title, not position: each key of a row map is
/// resolved through the title index built from `titles`, so the maps may
/// list their entries in any order and may omit columns. Body rows
/// alternate between the two body style stripes.
///
/// Argument and title validation run before any I/O; nothing is written
/// until the whole document has been built, so no failure leaves a
/// completed-looking file behind.
///
/// # Errors
///
/// - a repeated title is a configuration error
/// - a row key absent from `titles` is an unknown-column error
/// - codec and stream failures propagate from the final save
pub fn write_excel<P: AsRef<Path>>(
    path: P,
    sheet_name: &str,
    titles: &[&str],
    rows: &[RowValues],
) -> Result<()> {
    let mut destination = Destination::create(path)?;
    let order = TitleOrder::build(titles.iter().copied())?;
    let styles = StyleSet::standard();
    let formats = destination.role_formats(&styles);

    let sheet = destination.add_sheet(sheet_name)?;

    // header row
    let header = formats.get(StyleRole::Header);
    for (col, title) in order.titles().iter().enumerate() {
        let col = col as u16;
        sheet.write_with_format(0, col, title.as_str(), header)?;
        sheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    // body rows, 1-based
    for (i, values) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        let format = formats.body(row);
        for (key, value) in values {
            let col = order.column(key)?;
            write_value(sheet, row, col, value, format)?;
        }
    }

    destination.save()
}

/// Place one field value by its dispatch rule.
fn write_value(
    sheet: &mut XlsxWorksheet,
    row: u32,
    col: u16,
    value: &FieldValue,
    format: &Format,
) -> Result<()> {
    match value {
        FieldValue::Number(n) => {
            sheet.write_with_format(row, col, *n, format)?;
        }
        FieldValue::DateTime(dt) => {
            let text = dt.format(DATETIME_FORMAT).to_string();
            sheet.write_with_format(row, col, text, format)?;
        }
        FieldValue::Boolean(b) => {
            sheet.write_with_format(row, col, *b, format)?;
        }
        FieldValue::Text(s) => {
            sheet.write_with_format(row, col, s.as_str(), format)?;
        }
        FieldValue::Null => {}
    }
    Ok(())
}
