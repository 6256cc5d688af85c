//! Text extraction from source documents

use std::path::Path;

use relay_sheets_core::{Error as ModelError, Workbook, Worksheet};

use crate::codec::SourceBook;
use crate::error::Result;

/// Extract a document's contents as a single string.
///
/// With `sheet = None` every sheet contributes, in declaration order;
/// with `Some(index)` only that sheet does. Cells concatenate row-major
/// with no separators; sparse rows and cells are skipped, not substituted,
/// so an empty sheet yields the empty string.
pub fn read_excel<P: AsRef<Path>>(path: P, sheet: Option<usize>) -> Result<String> {
    let workbook = load(path)?;
    workbook_text(&workbook, sheet)
}

/// Concatenated display text of an in-memory workbook
pub fn workbook_text(workbook: &Workbook, sheet: Option<usize>) -> Result<String> {
    match sheet {
        None => Ok(workbook.sheets().map(sheet_text).collect()),
        Some(index) => Ok(sheet_text(select(workbook, index)?)),
    }
}

/// Display text of one sheet: present cells row-major, no separators
pub fn sheet_text(sheet: &Worksheet) -> String {
    let mut text = String::new();
    for (_, row) in sheet.rows() {
        for (_, cell) in row.cells() {
            text.push_str(&cell.display_text());
        }
    }
    text
}

/// Display text of the header row (row 0) of a sheet.
///
/// Absent cells up to the last present column render as empty strings; an
/// empty sheet yields an empty vec.
pub fn read_titles<P: AsRef<Path>>(path: P, sheet_no: usize) -> Result<Vec<String>> {
    let workbook = load(path)?;
    Ok(row_text(select(&workbook, sheet_no)?, 0))
}

/// Display text of one row of a sheet, in column order
pub fn read_row<P: AsRef<Path>>(path: P, sheet_no: usize, row: u32) -> Result<Vec<String>> {
    let workbook = load(path)?;
    Ok(row_text(select(&workbook, sheet_no)?, row))
}

/// Display text of one column, for every present row in order
pub fn read_column<P: AsRef<Path>>(path: P, sheet_no: usize, col: u16) -> Result<Vec<String>> {
    let workbook = load(path)?;
    let sheet = select(&workbook, sheet_no)?;
    Ok(sheet
        .rows()
        .map(|(_, row)| row.cell(col).map(|c| c.display_text()).unwrap_or_default())
        .collect())
}

/// Display text of a single cell; absent cells render as the empty string
pub fn read_cell<P: AsRef<Path>>(path: P, sheet_no: usize, row: u32, col: u16) -> Result<String> {
    let workbook = load(path)?;
    let sheet = select(&workbook, sheet_no)?;
    Ok(sheet
        .cell_at(row, col)
        .map(|c| c.display_text())
        .unwrap_or_default())
}

fn load<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    SourceBook::open(path)?.load()
}

fn select(workbook: &Workbook, index: usize) -> Result<&Worksheet> {
    workbook
        .sheet(index)
        .ok_or_else(|| ModelError::SheetOutOfBounds(index, workbook.sheet_count()).into())
}

fn row_text(sheet: &Worksheet, index: u32) -> Vec<String> {
    let Some(row) = sheet.row(index) else {
        return Vec::new();
    };
    let Some(last) = row.last_col() else {
        return Vec::new();
    };
    (0..=last)
        .map(|col| row.cell(col).map(|c| c.display_text()).unwrap_or_default())
        .collect()
}
