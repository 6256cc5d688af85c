//! Style-role model
//!
//! Written documents use a fixed set of four style roles: a document title,
//! the header row, and two alternating body styles. [`StyleSet`] describes
//! those roles as plain values; the write codec converts them into
//! workbook-owned format handles, once per destination workbook.

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl Color {
    /// Create a color from components
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Pack into a `0xRRGGBB` value
    pub const fn to_rgb(self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | (self.blue as u32)
    }

    /// Black
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    /// White
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    /// Light yellow, used for the title fill and the second body stripe
    pub const LIGHT_YELLOW: Color = Color::new(0xFF, 0xFF, 0x99);
    /// Light blue, used for the header fill
    pub const LIGHT_BLUE: Color = Color::new(0x33, 0x66, 0xFF);
    /// Blue grey, used for body text
    pub const BLUE_GREY: Color = Color::new(0x66, 0x66, 0xCC);
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Format-dependent default
    #[default]
    General,
    /// Left aligned
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    /// Bottom aligned (spreadsheet default)
    #[default]
    Bottom,
    /// Centered
    Center,
    /// Top aligned
    Top,
}

/// Text alignment settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Horizontal alignment
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment
    pub vertical: VerticalAlignment,
    /// Wrap text within the cell
    pub wrap_text: bool,
}

impl Alignment {
    /// Centered both ways
    pub const fn centered() -> Self {
        Self {
            horizontal: HorizontalAlignment::Center,
            vertical: VerticalAlignment::Center,
            wrap_text: false,
        }
    }

    /// Enable text wrapping
    pub const fn with_wrap(mut self) -> Self {
        self.wrap_text = true;
        self
    }
}

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderLine {
    /// No border
    #[default]
    None,
    /// Thin line on all four edges
    Thin,
}

/// Background fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillStyle {
    /// No fill (transparent)
    #[default]
    None,
    /// Solid color fill
    Solid(Color),
}

/// Font settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontStyle {
    /// Size in points
    pub size: f64,
    /// Bold text
    pub bold: bool,
    /// Font color; `None` keeps the format default
    pub color: Option<Color>,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            size: 11.0,
            bold: false,
            color: None,
        }
    }
}

/// Complete style descriptor for one role
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Font settings
    pub font: FontStyle,
    /// Background fill
    pub fill: FillStyle,
    /// Border settings (border color is always black when present)
    pub border: BorderLine,
    /// Text alignment
    pub alignment: Alignment,
    /// Cell protection lock
    pub locked: bool,
}

/// The four fixed style roles of a written document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleRole {
    /// Document title
    Title,
    /// Header row
    Header,
    /// Body rows with odd 1-based indices
    BodyA,
    /// Body rows with even 1-based indices
    BodyB,
}

/// Immutable set of the four role styles
///
/// Built once and threaded through writer calls; the destination codec
/// derives its own format handles from this set exactly once per
/// destination workbook and never shares them across workbooks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSet {
    title: Style,
    header: Style,
    body_a: Style,
    body_b: Style,
}

impl StyleSet {
    /// The standard role styles applied to every written document.
    ///
    /// Pure and deterministic: two calls always yield equal sets.
    pub fn standard() -> Self {
        let title = Style {
            font: FontStyle {
                size: 16.0,
                bold: true,
                color: None,
            },
            fill: FillStyle::Solid(Color::LIGHT_YELLOW),
            border: BorderLine::None,
            alignment: Alignment::centered(),
            locked: true,
        };

        let header = Style {
            font: FontStyle {
                size: 12.0,
                bold: false,
                color: Some(Color::WHITE),
            },
            fill: FillStyle::Solid(Color::LIGHT_BLUE),
            border: BorderLine::Thin,
            alignment: Alignment::centered().with_wrap(),
            locked: false,
        };

        let body_font = FontStyle {
            size: 12.0,
            bold: false,
            color: Some(Color::BLUE_GREY),
        };

        let body_a = Style {
            font: body_font.clone(),
            fill: FillStyle::None,
            border: BorderLine::Thin,
            alignment: Alignment::centered().with_wrap(),
            locked: false,
        };

        let body_b = Style {
            fill: FillStyle::Solid(Color::LIGHT_YELLOW),
            ..body_a.clone()
        };

        Self {
            title,
            header,
            body_a,
            body_b,
        }
    }

    /// Get the style for a role
    pub fn get(&self, role: StyleRole) -> &Style {
        match role {
            StyleRole::Title => &self.title,
            StyleRole::Header => &self.header,
            StyleRole::BodyA => &self.body_a,
            StyleRole::BodyB => &self.body_b,
        }
    }

    /// Body role for a 1-based body row index (odd rows stripe A)
    pub fn body_role(row: u32) -> StyleRole {
        if row % 2 == 1 {
            StyleRole::BodyA
        } else {
            StyleRole::BodyB
        }
    }
}
