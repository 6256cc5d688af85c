//! Error types for relay-sheets

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, writing or copying documents
#[derive(Debug, Error)]
pub enum Error {
    /// Blank path or blank extension; raised before any I/O
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Extension token outside the readable allow-list, or a write
    /// variant with no available serializer
    #[error("unsupported spreadsheet format: {extension:?}")]
    UnsupportedFormat {
        /// The offending extension token
        extension: String,
    },

    /// Model-level failure (duplicate titles, unknown columns, bad sheet
    /// index)
    #[error(transparent)]
    Model(#[from] relay_sheets_core::Error),

    /// Stream failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Read codec failure during open or parse
    #[error("read codec error: {0}")]
    Read(#[from] calamine::Error),

    /// Write codec failure during build or serialize
    #[error("write codec error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}
