//! Read-side codec adapter over calamine

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, CellErrorType, Data, Range, Reader, Xls, Xlsx};

use relay_sheets_core::{CachedResult, CellError, CellValue, Workbook, Worksheet};

use super::ReadFormat;
use crate::error::Result;

/// An open source workbook
///
/// Wraps whichever calamine reader the extension dispatch selected. The
/// underlying file handle is scoped to this value and released when it is
/// dropped, on every exit path.
pub struct SourceBook {
    reader: ReaderKind,
}

enum ReaderKind {
    Legacy(Xls<BufReader<File>>),
    Modern(Xlsx<BufReader<File>>),
}

impl SourceBook {
    /// Open a source workbook, selecting the codec variant from the
    /// extension allow-list. Path validation runs before the file is
    /// opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = match ReadFormat::for_path(path)? {
            ReadFormat::Legacy => {
                ReaderKind::Legacy(open_workbook(path).map_err(calamine::Error::from)?)
            }
            ReadFormat::Modern => {
                ReaderKind::Modern(open_workbook(path).map_err(calamine::Error::from)?)
            }
        };
        Ok(Self { reader })
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        match &self.reader {
            ReaderKind::Legacy(reader) => reader.sheet_names().to_vec(),
            ReaderKind::Modern(reader) => reader.sheet_names().to_vec(),
        }
    }

    /// Load the whole document into the core model.
    ///
    /// Cached formula results are merged with their formula source text
    /// into [`CellValue::Formula`] cells.
    pub fn load(mut self) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        for name in self.sheet_names() {
            let cells = self.cells(&name)?;
            let formulas = self.formulas(&name)?;
            let sheet = workbook.add_sheet(name)?;
            load_sheet(sheet, &cells, &formulas);
        }
        Ok(workbook)
    }

    fn cells(&mut self, name: &str) -> Result<Range<Data>> {
        match &mut self.reader {
            ReaderKind::Legacy(reader) => {
                Ok(reader.worksheet_range(name).map_err(calamine::Error::from)?)
            }
            ReaderKind::Modern(reader) => {
                Ok(reader.worksheet_range(name).map_err(calamine::Error::from)?)
            }
        }
    }

    fn formulas(&mut self, name: &str) -> Result<Range<String>> {
        match &mut self.reader {
            ReaderKind::Legacy(reader) => Ok(reader
                .worksheet_formula(name)
                .map_err(calamine::Error::from)?),
            ReaderKind::Modern(reader) => Ok(reader
                .worksheet_formula(name)
                .map_err(calamine::Error::from)?),
        }
    }
}

/// Populate a model sheet from the codec's cell and formula ranges.
///
/// A cell the codec cannot represent is logged and omitted; the rest of
/// the sheet is still extracted.
fn load_sheet(sheet: &mut Worksheet, cells: &Range<Data>, formulas: &Range<String>) {
    let (row0, col0) = cells.start().unwrap_or((0, 0));
    for (r, c, data) in cells.used_cells() {
        let row = row0 + r as u32;
        let col = (col0 + c as u32) as u16;
        let formula = formula_at(formulas, row, col0 + c as u32);
        match cell_value(data, formula) {
            Some(value) => sheet.set_cell(row, col, value),
            None => log::warn!(
                "skipping unreadable cell at ({row}, {col}) in sheet {:?}",
                sheet.name()
            ),
        }
    }

    // A formula whose cached result is empty has no entry in the data
    // range; surface it as a formula cell with an empty cached result.
    let (frow0, fcol0) = formulas.start().unwrap_or((0, 0));
    for (r, c, source) in formulas.used_cells() {
        if source.is_empty() {
            continue;
        }
        let row = frow0 + r as u32;
        let col = (fcol0 + c as u32) as u16;
        if sheet.cell_at(row, col).is_none() {
            let cached = CachedResult::Text(String::new());
            sheet.set_cell(row, col, CellValue::formula(source.clone(), cached));
        }
    }
}

fn formula_at(formulas: &Range<String>, row: u32, col: u32) -> Option<&str> {
    formulas
        .get_value((row, col))
        .map(String::as_str)
        .filter(|source| !source.is_empty())
}

/// Convert one codec cell into a model cell.
///
/// Returns `None` for data the engine has no representation for (ISO
/// date/duration strings from non-Excel producers).
fn cell_value(data: &Data, formula: Option<&str>) -> Option<CellValue> {
    if let Some(source) = formula {
        // an error result wins over the formula that produced it
        if let Data::Error(code) = data {
            return Some(CellValue::Error(error_code(code)));
        }
        return cached_result(data).map(|cached| CellValue::formula(source, cached));
    }

    match data {
        Data::Empty => Some(CellValue::Blank),
        Data::String(s) => Some(CellValue::text(s.clone())),
        Data::Float(f) => Some(CellValue::number(*f)),
        Data::Int(i) => Some(CellValue::number(*i as f64)),
        Data::Bool(b) => Some(CellValue::Boolean(*b)),
        Data::DateTime(dt) => Some(CellValue::date(dt.as_f64())),
        Data::Error(code) => Some(CellValue::Error(error_code(code))),
        Data::DateTimeIso(_) | Data::DurationIso(_) => None,
    }
}

/// The memoized result stored alongside a formula.
fn cached_result(data: &Data) -> Option<CachedResult> {
    match data {
        Data::Empty => Some(CachedResult::Text(String::new())),
        Data::String(s) => Some(CachedResult::Text(s.clone())),
        Data::Float(f) => Some(CachedResult::Number(*f)),
        Data::Int(i) => Some(CachedResult::Number(*i as f64)),
        Data::Bool(b) => Some(CachedResult::Text(b.to_string())),
        Data::DateTime(dt) => Some(CachedResult::Number(dt.as_f64())),
        Data::Error(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => None,
    }
}

fn error_code(code: &CellErrorType) -> CellError {
    match code {
        CellErrorType::Div0 => CellError::Div0,
        CellErrorType::NA => CellError::Na,
        CellErrorType::Name => CellError::Name,
        CellErrorType::Null => CellError::Null,
        CellErrorType::Num => CellError::Num,
        CellErrorType::Ref => CellError::Ref,
        CellErrorType::Value => CellError::Value,
        CellErrorType::GettingData => CellError::GettingData,
    }
}
