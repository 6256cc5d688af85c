//! Codec adapters
//!
//! The container formats themselves are not implemented here: calamine
//! parses source workbooks and rust_xlsxwriter serializes destination
//! workbooks. This module owns the narrow seam between the engine and
//! those crates: extension-based variant dispatch, loading codec data into
//! the core model, and deriving role formats for destination workbooks.

mod destination;
mod source;

pub use destination::{Destination, RoleFormats};
pub use source::SourceBook;

use std::path::Path;

use crate::error::{Error, Result};

/// Extension token of legacy binary workbooks
pub const LEGACY_EXTENSION: &str = "xls";
/// Extension token of modern workbooks
pub const MODERN_EXTENSION: &str = "xlsx";

/// Codec variant selected for reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFormat {
    /// Legacy binary container
    Legacy,
    /// Modern zipped-XML container
    Modern,
}

impl ReadFormat {
    /// Select the read codec variant for a source path.
    ///
    /// Only `xls` and `xlsx` (matched on the lower-cased token) are
    /// readable; any other token is unsupported. Validation happens before
    /// any file is opened.
    pub fn for_path(path: &Path) -> Result<Self> {
        let token = extension_token(path)?;
        match token.to_lowercase().as_str() {
            LEGACY_EXTENSION => Ok(ReadFormat::Legacy),
            MODERN_EXTENSION => Ok(ReadFormat::Modern),
            _ => Err(Error::UnsupportedFormat { extension: token }),
        }
    }
}

/// Codec variant selected for writing
///
/// Unlike the read side there is no allow-list: exactly `xls`
/// (case-insensitive) selects the legacy variant and every other token the
/// modern one. The asymmetry is long-standing observed behavior, kept as is
/// and flagged in DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteFormat {
    /// Legacy binary container
    Legacy,
    /// Modern zipped-XML container
    Modern,
}

impl WriteFormat {
    /// Select the write codec variant for a destination path
    pub fn for_path(path: &Path) -> Result<Self> {
        let token = extension_token(path)?;
        if token.eq_ignore_ascii_case(LEGACY_EXTENSION) {
            Ok(WriteFormat::Legacy)
        } else {
            Ok(WriteFormat::Modern)
        }
    }
}

/// The token after the last `.` of the file name.
///
/// A blank path and a blank or missing token are argument errors, raised
/// before any file is touched.
fn extension_token(path: &Path) -> Result<String> {
    if path.to_string_lossy().trim().is_empty() {
        return Err(Error::InvalidArgument("file path must not be blank".into()));
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(token) if !token.trim().is_empty() => Ok(token.to_string()),
        _ => Err(Error::InvalidArgument(
            "file extension must not be blank".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_allow_list() {
        assert_eq!(
            ReadFormat::for_path(Path::new("book.xls")).unwrap(),
            ReadFormat::Legacy
        );
        assert_eq!(
            ReadFormat::for_path(Path::new("book.XLSX")).unwrap(),
            ReadFormat::Modern
        );

        match ReadFormat::for_path(Path::new("notes.txt")) {
            Err(Error::UnsupportedFormat { extension }) => assert_eq!(extension, "txt"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn blank_paths_and_extensions_are_invalid() {
        assert!(matches!(
            ReadFormat::for_path(Path::new("")),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            ReadFormat::for_path(Path::new("no_extension")),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            WriteFormat::for_path(Path::new("")),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn write_side_has_no_allow_list() {
        assert_eq!(
            WriteFormat::for_path(Path::new("out.XLS")).unwrap(),
            WriteFormat::Legacy
        );
        assert_eq!(
            WriteFormat::for_path(Path::new("out.xlsx")).unwrap(),
            WriteFormat::Modern
        );
        // any non-xls token goes to the modern writer, even unknown ones
        assert_eq!(
            WriteFormat::for_path(Path::new("out.data")).unwrap(),
            WriteFormat::Modern
        );
    }
}
