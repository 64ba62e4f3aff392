//! Shape properties (`c:spPr`) for chart series.
//!
//! Only a solid area fill and a line with width and solid fill are modelled.
//! A style equal to its `Default` is never written.

use crate::common::RGBColor;

/// Line width (EMU) that applications assume when `a:ln@w` is absent.
pub const DEFAULT_LINE_WIDTH: u32 = 10_000;

/// Fill style. Only solid fills are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillStyle {
    /// `a:solidFill`
    #[default]
    Solid,
}

impl FillStyle {
    /// Returns the local XML element name for this fill style.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Solid => "solidFill",
        }
    }
}

/// A fill: an optional colour applied with a fill style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fill {
    /// Fill colour; `None` leaves the colour to the application
    pub color: Option<RGBColor>,
    /// How the colour is applied
    pub style: FillStyle,
}

impl Fill {
    /// A solid fill of the given colour.
    #[inline]
    pub const fn solid(color: RGBColor) -> Self {
        Self {
            color: Some(color),
            style: FillStyle::Solid,
        }
    }

    /// Whether this is a solid fill with no colour.
    #[inline]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Outline of a series shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// Line fill
    pub fill: Fill,
    /// Width in EMU
    pub width: u32,
}

impl Line {
    /// Create a line of the given width with an unset fill.
    #[inline]
    pub const fn new(width: u32) -> Self {
        Self {
            fill: Fill {
                color: None,
                style: FillStyle::Solid,
            },
            width,
        }
    }

    /// Set the line fill.
    #[inline]
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Whether this is an uncoloured line of the default width.
    #[inline]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for Line {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_LINE_WIDTH)
    }
}

/// Shape styling of a series: area fill plus outline.
///
/// # Examples
///
/// ```rust
/// use sheetchart::common::RGBColor;
/// use sheetchart::ooxml::charts::{Fill, ShapeStyle};
///
/// let style = ShapeStyle::new().with_area(Fill::solid(RGBColor::new(255, 0, 0)));
/// assert!(!style.is_default());
/// assert!(ShapeStyle::default().is_default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShapeStyle {
    /// Area fill
    pub area: Fill,
    /// Outline
    pub line: Line,
}

impl ShapeStyle {
    /// Create a default (empty) shape style.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the area fill.
    #[inline]
    pub fn with_area(mut self, area: Fill) -> Self {
        self.area = area;
        self
    }

    /// Set the outline.
    #[inline]
    pub fn with_line(mut self, line: Line) -> Self {
        self.line = line;
        self
    }

    /// Whether this style carries nothing worth writing.
    #[inline]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
