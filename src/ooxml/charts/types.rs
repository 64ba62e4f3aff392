//! Core chart enumerations.
//!
//! This module defines chart types, axis kinds and positions, and marker
//! symbols, together with their DrawingML spellings.

use std::fmt;
use std::ops::RangeInclusive;

/// Chart type enumeration.
///
/// Every chart type of the DrawingML schema has a variant so that a chart can
/// name it, but only the ones for which [`ChartType::is_supported`] returns
/// `true` are read and written. The rest are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    /// Area chart (2D)
    Area,
    /// Area chart (3D)
    Area3D,
    /// Line chart
    Line,
    /// Line chart (3D)
    Line3D,
    /// Stock chart (reserved)
    Stock,
    /// Radar chart (reserved)
    Radar,
    /// Scatter (XY) chart
    Scatter,
    /// Pie chart
    Pie,
    /// Pie chart (3D)
    Pie3D,
    /// Doughnut chart
    Doughnut,
    /// Bar/column chart
    Bar,
    /// Bar/column chart (3D)
    Bar3D,
    /// Pie-of-pie / bar-of-pie chart (reserved)
    OfPie,
    /// Surface chart (reserved)
    Surface,
    /// Surface chart 3D (reserved)
    Surface3D,
    /// Bubble chart (reserved for writing; derivation treats it like scatter)
    Bubble,
}

/// Element names recognized by the reader.
static SUPPORTED_ELEMENTS: phf::Map<&'static str, ChartType> = phf::phf_map! {
    "areaChart" => ChartType::Area,
    "area3DChart" => ChartType::Area3D,
    "lineChart" => ChartType::Line,
    "line3DChart" => ChartType::Line3D,
    "scatterChart" => ChartType::Scatter,
    "pieChart" => ChartType::Pie,
    "pie3DChart" => ChartType::Pie3D,
    "doughnutChart" => ChartType::Doughnut,
    "barChart" => ChartType::Bar,
    "bar3DChart" => ChartType::Bar3D,
};

impl ChartType {
    /// Returns the local XML element name for this chart type.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Area => "areaChart",
            Self::Area3D => "area3DChart",
            Self::Line => "lineChart",
            Self::Line3D => "line3DChart",
            Self::Stock => "stockChart",
            Self::Radar => "radarChart",
            Self::Scatter => "scatterChart",
            Self::Pie => "pieChart",
            Self::Pie3D => "pie3DChart",
            Self::Doughnut => "doughnutChart",
            Self::Bar => "barChart",
            Self::Bar3D => "bar3DChart",
            Self::OfPie => "ofPieChart",
            Self::Surface => "surfaceChart",
            Self::Surface3D => "surface3DChart",
            Self::Bubble => "bubbleChart",
        }
    }

    /// Look up a supported chart type by its local element name.
    ///
    /// Reserved types are deliberately absent, so `bubbleChart` yields `None`.
    #[inline]
    pub fn from_element_name(name: &[u8]) -> Option<Self> {
        std::str::from_utf8(name)
            .ok()
            .and_then(|name| SUPPORTED_ELEMENTS.get(name).copied())
    }

    /// Whether the codec reads and writes this chart type.
    #[inline]
    pub const fn is_supported(&self) -> bool {
        !matches!(
            self,
            Self::Stock | Self::Radar | Self::OfPie | Self::Surface | Self::Surface3D | Self::Bubble
        )
    }

    /// Returns true if this is a 3D chart type.
    #[inline]
    pub const fn is_3d(&self) -> bool {
        matches!(
            self,
            Self::Area3D | Self::Bar3D | Self::Line3D | Self::Pie3D | Self::Surface3D
        )
    }

    /// Series of this type use `xVal`/`yVal` instead of `cat`/`val`.
    #[inline]
    pub const fn uses_xy_values(&self) -> bool {
        matches!(self, Self::Scatter | Self::Bubble)
    }

    /// Series of this type may carry a `marker` element.
    #[inline]
    pub const fn supports_markers(&self) -> bool {
        matches!(self, Self::Line | Self::Line3D | Self::Scatter)
    }

    /// Pie-family charts have no axes at all.
    #[inline]
    pub const fn is_axisless(&self) -> bool {
        matches!(self, Self::Pie | Self::Pie3D | Self::Doughnut | Self::OfPie)
    }

    /// Number of axes this chart type accepts when written.
    ///
    /// Returns `None` for reserved types, which are never written.
    pub fn axis_count_range(&self) -> Option<RangeInclusive<usize>> {
        match self {
            Self::Bar | Self::Line | Self::Area | Self::Scatter => Some(2..=2),
            Self::Bar3D | Self::Line3D | Self::Area3D => Some(2..=3),
            Self::Pie | Self::Pie3D | Self::Doughnut => Some(0..=0),
            _ => None,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_element_name())
    }
}

/// Chart-level style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartStyle {
    /// Application default
    #[default]
    Default,
    /// Lines between points; only meaningful for scatter charts
    Line,
}

/// Axis kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Category axis
    Category,
    /// Value axis
    Value,
    /// Date axis
    Date,
    /// Series axis (for 3D charts)
    Series,
}

impl AxisKind {
    /// Returns the local XML element name for this axis kind.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Category => "catAx",
            Self::Value => "valAx",
            Self::Date => "dateAx",
            Self::Series => "serAx",
        }
    }

    /// Map an axis element name to its kind. Any unknown `*Ax` name is a date axis.
    #[inline]
    pub fn from_element_name(name: &[u8]) -> Self {
        match name {
            b"valAx" => Self::Value,
            b"catAx" => Self::Category,
            b"serAx" => Self::Series,
            _ => Self::Date,
        }
    }
}

/// Axis position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisPosition {
    /// Left position
    Left,
    /// Right position
    Right,
    /// Top position
    Top,
    /// Bottom position
    Bottom,
}

impl AxisPosition {
    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
            Self::Bottom => "b",
        }
    }

    /// Parse an `axPos@val` value; anything unrecognized is `Top`.
    #[inline]
    pub fn from_xml_value(value: &[u8]) -> Self {
        match value {
            b"l" => Self::Left,
            b"r" => Self::Right,
            b"b" => Self::Bottom,
            _ => Self::Top,
        }
    }
}

/// Marker symbol drawn at each data point of a line or scatter series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarkerType {
    /// Let the application decide; no `marker` element is written
    #[default]
    Default,
    /// No marker
    None,
    /// Automatic marker
    Auto,
    /// Circle marker
    Circle,
    /// Dash marker
    Dash,
    /// Diamond marker
    Diamond,
    /// Dot marker
    Dot,
    /// Picture marker
    Picture,
    /// Plus marker
    Plus,
    /// Square marker
    Square,
    /// Star marker
    Star,
    /// Triangle marker
    Triangle,
    /// X marker
    X,
}

impl MarkerType {
    /// Returns the `symbol@val` value, or `None` for [`MarkerType::Default`].
    #[inline]
    pub const fn xml_value(&self) -> Option<&'static str> {
        Some(match self {
            Self::Default => return None,
            Self::None => "none",
            Self::Auto => "auto",
            Self::Circle => "circle",
            Self::Dash => "dash",
            Self::Diamond => "diamond",
            Self::Dot => "dot",
            Self::Picture => "picture",
            Self::Plus => "plus",
            Self::Square => "square",
            Self::Star => "star",
            Self::Triangle => "triangle",
            Self::X => "x",
        })
    }

    /// Parse a `symbol@val` value.
    #[inline]
    pub fn from_xml_value(value: &[u8]) -> Option<Self> {
        Some(match value {
            b"none" => Self::None,
            b"auto" => Self::Auto,
            b"circle" => Self::Circle,
            b"dash" => Self::Dash,
            b"diamond" => Self::Diamond,
            b"dot" => Self::Dot,
            b"picture" => Self::Picture,
            b"plus" => Self::Plus,
            b"square" => Self::Square,
            b"star" => Self::Star,
            b"triangle" => Self::Triangle,
            b"x" => Self::X,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_element_lookup() {
        assert_eq!(ChartType::from_element_name(b"barChart"), Some(ChartType::Bar));
        assert_eq!(
            ChartType::from_element_name(b"doughnutChart"),
            Some(ChartType::Doughnut)
        );
        assert_eq!(ChartType::from_element_name(b"bubbleChart"), None);
        assert_eq!(ChartType::from_element_name(b"radarChart"), None);
        assert_eq!(ChartType::from_element_name(&[0xFF, 0xFE]), None);
    }

    #[test]
    fn test_element_names_match_lookup() {
        for ty in [
            ChartType::Area,
            ChartType::Area3D,
            ChartType::Line,
            ChartType::Line3D,
            ChartType::Scatter,
            ChartType::Pie,
            ChartType::Pie3D,
            ChartType::Doughnut,
            ChartType::Bar,
            ChartType::Bar3D,
        ] {
            assert!(ty.is_supported());
            assert_eq!(
                ChartType::from_element_name(ty.xml_element_name().as_bytes()),
                Some(ty)
            );
        }
        assert!(!ChartType::Surface3D.is_supported());
    }

    #[test]
    fn test_axis_count_ranges() {
        assert_eq!(ChartType::Bar.axis_count_range(), Some(2..=2));
        assert_eq!(ChartType::Area3D.axis_count_range(), Some(2..=3));
        assert_eq!(ChartType::Doughnut.axis_count_range(), Some(0..=0));
        assert_eq!(ChartType::Radar.axis_count_range(), None);
    }

    #[test]
    fn test_axis_position_parsing() {
        assert_eq!(AxisPosition::from_xml_value(b"l"), AxisPosition::Left);
        assert_eq!(AxisPosition::from_xml_value(b"r"), AxisPosition::Right);
        assert_eq!(AxisPosition::from_xml_value(b"b"), AxisPosition::Bottom);
        assert_eq!(AxisPosition::from_xml_value(b"t"), AxisPosition::Top);
        assert_eq!(AxisPosition::from_xml_value(b"middle"), AxisPosition::Top);
    }

    #[test]
    fn test_marker_values() {
        assert_eq!(MarkerType::Default.xml_value(), None);
        assert_eq!(MarkerType::None.xml_value(), Some("none"));
        assert_eq!(MarkerType::from_xml_value(b"triangle"), Some(MarkerType::Triangle));
        assert_eq!(MarkerType::from_xml_value(b"hexagon"), None);
    }
}
