//! # relay-sheets
//!
//! A Rust library for moving tabular data in and out of spreadsheets by
//! column name.
//!
//! relay-sheets reads `.xls`/`.xlsx` documents into a uniform textual
//! representation, writes new documents from a header list plus row-value
//! maps (with consistent styling and name-based column placement), and can
//! copy a document while flattening formulas to their evaluated display
//! text. The container formats are consumed through codec adapters —
//! calamine on the read side, rust_xlsxwriter on the write side — and are
//! not implemented here.
//!
//! ## Example
//!
//! ```no_run
//! use relay_sheets::{read_excel, write_excel, FieldValue, RowValues};
//!
//! let rows: Vec<RowValues> = vec![
//!     RowValues::from([
//!         ("name".to_string(), FieldValue::from("Ann")),
//!         ("age".to_string(), FieldValue::from(30.0)),
//!     ]),
//!     RowValues::from([
//!         ("name".to_string(), FieldValue::from("Bo")),
//!         ("age".to_string(), FieldValue::from(25.0)),
//!     ]),
//! ];
//!
//! write_excel("people.xlsx", "people", &["name", "age"], &rows)?;
//!
//! let text = read_excel("people.xlsx", Some(0))?;
//! assert_eq!(text, "nameageAnn30Bo25");
//! # Ok::<(), relay_sheets::Error>(())
//! ```

pub mod codec;
pub mod copier;
pub mod error;
pub mod reader;
pub mod writer;

pub use copier::{snapshot, snapshot_workbook, CachedEvaluator, FormulaEvaluator};
pub use error::{Error, Result};
pub use reader::{
    read_cell, read_column, read_excel, read_row, read_titles, sheet_text, workbook_text,
};
pub use writer::{write_excel, RowValues};

// Re-export core types
pub use relay_sheets_core::{
    CachedResult, CellError, CellValue, FieldValue, Row, Style, StyleRole, StyleSet, TitleOrder,
    Workbook, Worksheet, DATETIME_FORMAT, ERROR_TEXT,
};
