//! Sheet identity as seen by the chart codec.

use std::borrow::Cow;

/// Kind of sheet a chart or data source lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SheetKind {
    /// A grid of cells that can feed series data
    #[default]
    Worksheet,
    /// A sheet holding a single chart and no cells
    Chartsheet,
    /// Legacy dialog sheet
    Dialogsheet,
    /// Excel 4.0 macro sheet
    Macrosheet,
}

impl SheetKind {
    /// Whether cells of this sheet can be referenced as series data.
    #[inline]
    pub const fn is_worksheet(&self) -> bool {
        matches!(self, Self::Worksheet)
    }
}

/// A sheet that can host a chart or provide series data.
///
/// Implemented by the workbook layer; the chart codec only needs the name
/// and the kind.
pub trait Sheet {
    /// Sheet name as shown on its tab (unescaped).
    fn name(&self) -> &str;

    /// Kind of the sheet.
    fn kind(&self) -> SheetKind;
}

/// Owned snapshot of a sheet's identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetInfo {
    pub name: String,
    pub kind: SheetKind,
}

impl SheetInfo {
    /// Create sheet info.
    #[inline]
    pub fn new(name: impl Into<String>, kind: SheetKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Shorthand for a worksheet.
    #[inline]
    pub fn worksheet(name: impl Into<String>) -> Self {
        Self::new(name, SheetKind::Worksheet)
    }

    /// Capture the identity of any [`Sheet`].
    #[inline]
    pub fn from_sheet(sheet: &dyn Sheet) -> Self {
        Self::new(sheet.name(), sheet.kind())
    }
}

impl Sheet for SheetInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SheetKind {
        self.kind
    }
}

/// Quote a sheet name for use in a formula reference.
///
/// Names made only of word characters and dots are returned unchanged.
/// Anything else (spaces, apostrophes, punctuation) is wrapped in single
/// quotes with embedded apostrophes doubled. Names that already arrive
/// quoted are left alone.
///
/// # Examples
///
/// ```
/// use sheetchart::sheet::escape_sheet_name;
///
/// assert_eq!(escape_sheet_name("Sheet1"), "Sheet1");
/// assert_eq!(escape_sheet_name("Q1 Sales"), "'Q1 Sales'");
/// assert_eq!(escape_sheet_name("Bob's"), "'Bob''s'");
/// ```
pub fn escape_sheet_name(name: &str) -> Cow<'_, str> {
    let already_quoted = name.len() >= 2 && name.starts_with('\'') && name.ends_with('\'');
    let plain = name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.');
    if already_quoted || plain {
        return Cow::Borrowed(name);
    }

    Cow::Owned(format!("'{}'", name.replace('\'', "''")))
}
