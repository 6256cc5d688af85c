//! Snapshot copier
//!
//! Copies a document into a new one whose cells hold the evaluated display
//! text of the source cells. Formula cells are resolved through the
//! evaluator boundary, never echoed as source text, and do not survive the
//! copy; sheet order and every present (row, column) position do.

use std::path::Path;

use relay_sheets_core::{CachedResult, CellValue, Workbook};

use crate::codec::{Destination, SourceBook};
use crate::error::Result;

/// Resolves formula cells to a result.
///
/// The engine requests formula results and never computes them.
/// Implementations typically hand back a result memoized by the
/// application that produced the document.
pub trait FormulaEvaluator {
    /// Resolve the formula at (`row`, `col`) of the named sheet.
    fn evaluate(
        &self,
        sheet: &str,
        row: u32,
        col: u16,
        source: &str,
        cached: &CachedResult,
    ) -> CachedResult;
}

/// Evaluator that answers with the result the source codec memoized
/// alongside each formula
#[derive(Debug, Clone, Copy, Default)]
pub struct CachedEvaluator;

impl FormulaEvaluator for CachedEvaluator {
    fn evaluate(
        &self,
        _sheet: &str,
        _row: u32,
        _col: u16,
        _source: &str,
        cached: &CachedResult,
    ) -> CachedResult {
        cached.clone()
    }
}

/// Flatten a workbook into one holding only text cells.
///
/// This is a structural flatten, not a clone: every present source cell
/// maps to a text cell at the same position containing its evaluated
/// display text, and sparse positions stay absent.
pub fn snapshot_workbook(source: &Workbook, evaluator: &dyn FormulaEvaluator) -> Workbook {
    let mut copy = Workbook::new();
    for sheet in source.sheets() {
        let dest = copy
            .add_sheet(sheet.name())
            .expect("source sheet names are unique");
        for (row, cells) in sheet.rows() {
            for (col, value) in cells.cells() {
                let text = match value {
                    CellValue::Formula { source, cached } => evaluator
                        .evaluate(sheet.name(), row, col, source, cached)
                        .display_text(),
                    other => other.display_text(),
                };
                dest.set_cell(row, col, CellValue::Text(text));
            }
        }
    }
    copy
}

/// Copy the document at `src` to a new document at `dest`, flattening
/// formulas to their evaluated display text.
///
/// The destination is validated before the source is opened; both handles
/// are scoped to this call and released on every exit path.
pub fn snapshot<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> Result<()> {
    let mut destination = Destination::create(dest)?;
    let source = SourceBook::open(src)?.load()?;

    let flattened = snapshot_workbook(&source, &CachedEvaluator);
    destination.write_workbook(&flattened)?;
    destination.save()
}
