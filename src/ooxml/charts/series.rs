//! Chart series model.

use crate::ooxml::charts::shape::ShapeStyle;
use crate::ooxml::charts::types::MarkerType;

/// A data series.
///
/// Sources are sheet-qualified absolute references such as
/// `Sheet1!$B$2:$B$10`. A series has no identity of its own: its position in
/// the chart's series list is written as both `idx` and `order`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// Category (or X) reference
    pub category_source: Option<String>,
    /// Value (or Y) reference
    pub value_source: Option<String>,
    /// Marker symbol
    pub marker: MarkerType,
    /// Shape styling
    pub shape: Option<ShapeStyle>,
}

impl Series {
    /// Create a series over the given value reference.
    #[inline]
    pub fn new(value_source: impl Into<String>) -> Self {
        Self {
            value_source: Some(value_source.into()),
            ..Self::default()
        }
    }

    /// Set the category (or X) reference.
    #[inline]
    pub fn with_category(mut self, category_source: impl Into<String>) -> Self {
        self.category_source = Some(category_source.into());
        self
    }

    /// Set the marker symbol.
    #[inline]
    pub fn with_marker(mut self, marker: MarkerType) -> Self {
        self.marker = marker;
        self
    }

    /// Set the shape styling.
    #[inline]
    pub fn with_shape(mut self, shape: ShapeStyle) -> Self {
        self.shape = Some(shape);
        self
    }

    /// The category reference if present and non-empty.
    #[inline]
    pub fn category(&self) -> Option<&str> {
        self.category_source.as_deref().filter(|s| !s.is_empty())
    }

    /// The value reference if present and non-empty.
    #[inline]
    pub fn values(&self) -> Option<&str> {
        self.value_source.as_deref().filter(|s| !s.is_empty())
    }

    /// The shape styling if it differs from the default.
    #[inline]
    pub fn styled_shape(&self) -> Option<&ShapeStyle> {
        self.shape.as_ref().filter(|s| !s.is_default())
    }
}
