//! Error types for relay-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in relay-sheets-core
#[derive(Debug, Error)]
pub enum Error {
    /// A header title appears more than once in a title list
    #[error("duplicate column title: {0}")]
    DuplicateTitle(String),

    /// A row key does not appear in the title list
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Sheet name already used within the workbook
    #[error("sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Sheet index out of bounds
    #[error("sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),
}
