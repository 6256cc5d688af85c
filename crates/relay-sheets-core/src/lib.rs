//! # relay-sheets-core
//!
//! Core data structures for the relay-sheets interchange engine.
//!
//! This crate provides the fundamental types shared by the reader, writer
//! and copier components:
//! - [`CellValue`] - the closed set of cell contents (numbers, dates, text,
//!   booleans, formulas with cached results, blanks, errors) and the rules
//!   for turning each into display text
//! - [`FieldValue`] - the closed set of values accepted on the write path
//! - [`Workbook`], [`Worksheet`], [`Row`] - the sparse document model
//! - [`StyleSet`] - the four fixed style roles applied when writing
//! - [`TitleOrder`] - the header-text to column-index mapping
//!
//! ## Example
//!
//! ```rust
//! use relay_sheets_core::{CellValue, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.add_sheet("people").unwrap();
//!
//! sheet.set_cell(0, 0, CellValue::text("name"));
//! sheet.set_cell(1, 0, CellValue::text("Ann"));
//! sheet.set_cell(1, 1, CellValue::number(30.0));
//!
//! assert_eq!(sheet.cell_at(1, 1).unwrap().display_text(), "30");
//! ```

pub mod cell;
pub mod error;
pub mod field;
pub mod style;
pub mod title;
pub mod workbook;
pub mod worksheet;

pub use cell::{CachedResult, CellError, CellValue, ERROR_TEXT};
pub use error::{Error, Result};
pub use field::{FieldValue, DATETIME_FORMAT};
pub use style::{
    Alignment, BorderLine, Color, FillStyle, FontStyle, HorizontalAlignment, Style, StyleRole,
    StyleSet, VerticalAlignment,
};
pub use title::TitleOrder;
pub use workbook::Workbook;
pub use worksheet::{Row, Worksheet};
