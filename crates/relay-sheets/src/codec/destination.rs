//! Write-side codec adapter over rust_xlsxwriter

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{
    Format, FormatAlign, FormatBorder, Workbook as XlsxWorkbook, Worksheet as XlsxWorksheet,
};

use relay_sheets_core::{
    BorderLine, CellValue, Color, FillStyle, HorizontalAlignment, Style, StyleRole, StyleSet,
    VerticalAlignment, Workbook,
};

use super::{WriteFormat, LEGACY_EXTENSION};
use crate::error::{Error, Result};

/// An open destination workbook
///
/// Content accumulates in memory; nothing reaches the path until
/// [`Destination::save`] serializes and closes it. A failure part-way
/// through a write therefore never leaves a completed-looking file behind.
pub struct Destination {
    workbook: XlsxWorkbook,
    path: PathBuf,
}

impl Destination {
    /// Create a destination for the given path.
    ///
    /// The extension token alone selects the codec variant (see
    /// [`WriteFormat`]). No serializer for the legacy binary container
    /// exists in the ecosystem, so the legacy variant fails here, before
    /// any I/O.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match WriteFormat::for_path(path)? {
            WriteFormat::Legacy => Err(Error::UnsupportedFormat {
                extension: LEGACY_EXTENSION.to_string(),
            }),
            WriteFormat::Modern => Ok(Self {
                workbook: XlsxWorkbook::new(),
                path: path.to_path_buf(),
            }),
        }
    }

    /// Add a sheet; a blank name keeps the codec's default sheet name.
    pub fn add_sheet(&mut self, name: &str) -> Result<&mut XlsxWorksheet> {
        let sheet = self.workbook.add_worksheet();
        if !name.trim().is_empty() {
            sheet.set_name(name)?;
        }
        Ok(sheet)
    }

    /// Derive the workbook-owned format handles for a style set.
    ///
    /// Built exactly once per destination; the handles must not be reused
    /// with another destination workbook.
    pub fn role_formats(&self, styles: &StyleSet) -> RoleFormats {
        RoleFormats::build(styles)
    }

    /// Copy a model workbook into the destination, preserving sheet order
    /// and every present (row, column) position.
    pub fn write_workbook(&mut self, workbook: &Workbook) -> Result<()> {
        for model_sheet in workbook.sheets() {
            let name = model_sheet.name().to_string();
            let sheet = self.add_sheet(&name)?;
            for (row, cells) in model_sheet.rows() {
                for (col, value) in cells.cells() {
                    write_cell(sheet, row, col, value)?;
                }
            }
        }
        Ok(())
    }

    /// Serialize the workbook and close the destination.
    pub fn save(mut self) -> Result<()> {
        self.workbook.save(&self.path)?;
        Ok(())
    }
}

/// Write one model cell without a format.
fn write_cell(sheet: &mut XlsxWorksheet, row: u32, col: u16, value: &CellValue) -> Result<()> {
    match value {
        CellValue::Blank => {}
        CellValue::Boolean(b) => {
            sheet.write(row, col, *b)?;
        }
        CellValue::Number { value, .. } => {
            sheet.write(row, col, *value)?;
        }
        CellValue::Text(s) => {
            sheet.write(row, col, s.as_str())?;
        }
        CellValue::Formula { source, .. } => {
            let formula = if source.starts_with('=') {
                source.clone()
            } else {
                format!("={source}")
            };
            sheet.write_formula(row, col, formula.as_str())?;
        }
        CellValue::Error(code) => {
            sheet.write(row, col, code.as_str())?;
        }
    }
    Ok(())
}

/// Format handles for the four style roles, owned by one destination
pub struct RoleFormats {
    title: Format,
    header: Format,
    body_a: Format,
    body_b: Format,
}

impl RoleFormats {
    fn build(styles: &StyleSet) -> Self {
        Self {
            title: format_from(styles.get(StyleRole::Title)),
            header: format_from(styles.get(StyleRole::Header)),
            body_a: format_from(styles.get(StyleRole::BodyA)),
            body_b: format_from(styles.get(StyleRole::BodyB)),
        }
    }

    /// Format handle for a role
    pub fn get(&self, role: StyleRole) -> &Format {
        match role {
            StyleRole::Title => &self.title,
            StyleRole::Header => &self.header,
            StyleRole::BodyA => &self.body_a,
            StyleRole::BodyB => &self.body_b,
        }
    }

    /// Format handle for a 1-based body row (odd rows stripe A)
    pub fn body(&self, row: u32) -> &Format {
        self.get(StyleSet::body_role(row))
    }
}

/// Convert a style descriptor into a codec format.
fn format_from(style: &Style) -> Format {
    let mut format = Format::new();

    match style.alignment.horizontal {
        HorizontalAlignment::General => {}
        HorizontalAlignment::Left => format = format.set_align(FormatAlign::Left),
        HorizontalAlignment::Center => format = format.set_align(FormatAlign::Center),
        HorizontalAlignment::Right => format = format.set_align(FormatAlign::Right),
    }
    match style.alignment.vertical {
        VerticalAlignment::Bottom => {}
        VerticalAlignment::Center => format = format.set_align(FormatAlign::VerticalCenter),
        VerticalAlignment::Top => format = format.set_align(FormatAlign::Top),
    }
    if style.alignment.wrap_text {
        format = format.set_text_wrap();
    }

    if let FillStyle::Solid(color) = style.fill {
        format = format.set_background_color(color.to_rgb());
    }
    if style.border == BorderLine::Thin {
        format = format
            .set_border(FormatBorder::Thin)
            .set_border_color(Color::BLACK.to_rgb());
    }

    format = format.set_font_size(style.font.size);
    if style.font.bold {
        format = format.set_bold();
    }
    if let Some(color) = style.font.color {
        format = format.set_font_color(color.to_rgb());
    }
    if style.locked {
        format = format.set_locked();
    }

    format
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_destinations_are_rejected_before_io() {
        match Destination::create("out.xls") {
            Err(Error::UnsupportedFormat { extension }) => assert_eq!(extension, "xls"),
            Err(other) => panic!("expected UnsupportedFormat, got {other:?}"),
            Ok(_) => panic!("legacy destination must fail"),
        }
        assert!(!Path::new("out.xls").exists());
    }

    #[test]
    fn role_formats_cover_all_roles() {
        let styles = StyleSet::standard();
        let destination = Destination::create("out.xlsx").unwrap();
        let formats = destination.role_formats(&styles);

        // stripes alternate between the two body handles
        assert!(std::ptr::eq(formats.body(1), formats.get(StyleRole::BodyA)));
        assert!(std::ptr::eq(formats.body(2), formats.get(StyleRole::BodyB)));
        assert!(std::ptr::eq(formats.body(3), formats.get(StyleRole::BodyA)));
    }
}
