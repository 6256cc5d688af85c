//! Workbook type - the main document structure

use crate::error::{Error, Result};
use crate::worksheet::Worksheet;

/// A workbook (spreadsheet document)
///
/// A workbook is an ordered sequence of uniquely named worksheets. It is a
/// plain in-memory value; opening, flushing and closing files is the job of
/// the codec adapters that populate or consume it.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workbook {
    sheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create a new workbook with no worksheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn sheet(&self, index: usize) -> Option<&Worksheet> {
        self.sheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.sheets.get_mut(index)
    }

    /// Get a worksheet by name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.sheets.iter().find(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets in declaration order
    pub fn sheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.sheets.iter()
    }

    /// Sheet names in declaration order
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|ws| ws.name().to_string()).collect()
    }

    /// Add a new empty worksheet with the given name
    pub fn add_sheet<S: Into<String>>(&mut self, name: S) -> Result<&mut Worksheet> {
        let name = name.into();
        if self.sheets.iter().any(|ws| ws.name() == name) {
            return Err(Error::DuplicateSheetName(name));
        }
        self.sheets.push(Worksheet::new(name));
        Ok(self.sheets.last_mut().expect("sheet was just pushed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sheets_keep_declaration_order() {
        let mut wb = Workbook::new();
        wb.add_sheet("b").unwrap();
        wb.add_sheet("a").unwrap();

        assert_eq!(wb.sheet_names(), vec!["b", "a"]);
        assert_eq!(wb.sheet(0).unwrap().name(), "b");
        assert!(wb.sheet(2).is_none());
    }

    #[test]
    fn duplicate_sheet_names_are_rejected() {
        let mut wb = Workbook::new();
        wb.add_sheet("data").unwrap();

        match wb.add_sheet("data") {
            Err(Error::DuplicateSheetName(name)) => assert_eq!(name, "data"),
            other => panic!("expected DuplicateSheetName, got {other:?}"),
        }
        assert_eq!(wb.sheet_count(), 1);
    }
}
