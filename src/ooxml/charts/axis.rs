//! Chart axis model.
//!
//! An axis is written as a `c:catAx`, `c:valAx`, `c:dateAx` or `c:serAx`
//! element inside the plot area. Axes reference each other by id through
//! `crossAx`.

use crate::ooxml::charts::types::{AxisKind, AxisPosition};

/// A chart axis.
///
/// # Examples
///
/// ```rust
/// use sheetchart::ooxml::charts::{Axis, AxisKind, AxisPosition};
///
/// let axis = Axis::new(AxisKind::Value, AxisPosition::Left, 1, 0)
///     .with_title("Revenue")
///     .with_bounds(Some(0.0), Some(100.0));
/// assert_eq!(axis.min(), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Axis kind
    pub kind: AxisKind,
    /// Axis position
    pub position: AxisPosition,
    /// Axis id, referenced from chart-type `axId` elements
    pub id: u32,
    /// Id of the axis this one crosses
    pub cross_id: u32,
    /// Plain-text title
    pub title: Option<String>,
    /// Fixed minimum; `None` lets the application scale
    pub min: Option<f64>,
    /// Fixed maximum; `None` lets the application scale
    pub max: Option<f64>,
}

impl Axis {
    /// Create a new axis without title or bounds.
    #[inline]
    pub fn new(kind: AxisKind, position: AxisPosition, id: u32, cross_id: u32) -> Self {
        Self {
            kind,
            position,
            id,
            cross_id,
            title: None,
            min: None,
            max: None,
        }
    }

    /// Set the title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the scaling bounds.
    #[inline]
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// The minimum, treating NaN and infinities as unset.
    #[inline]
    pub fn min(&self) -> Option<f64> {
        self.min.filter(|v| v.is_finite())
    }

    /// The maximum, treating NaN and infinities as unset.
    #[inline]
    pub fn max(&self) -> Option<f64> {
        self.max.filter(|v| v.is_finite())
    }

    /// The title if it is present and non-empty.
    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_bounds_are_unset() {
        let axis = Axis::new(AxisKind::Value, AxisPosition::Left, 1, 0)
            .with_bounds(Some(f64::NAN), Some(10.0));
        assert_eq!(axis.min(), None);
        assert_eq!(axis.max(), Some(10.0));

        let axis = axis.with_bounds(Some(f64::NEG_INFINITY), Some(f64::INFINITY));
        assert_eq!((axis.min(), axis.max()), (None, None));
    }

    #[test]
    fn test_empty_title_is_absent() {
        let axis = Axis::new(AxisKind::Category, AxisPosition::Bottom, 0, 1).with_title("");
        assert_eq!(axis.title(), None);
        assert_eq!(axis.with_title("Q").title(), Some("Q"));
    }
}
