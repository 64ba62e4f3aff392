//! Chart model and axis resolution.

use smallvec::SmallVec;

use crate::ooxml::charts::axis::Axis;
use crate::ooxml::charts::series::Series;
use crate::ooxml::charts::types::{AxisKind, AxisPosition, ChartStyle, ChartType};
use crate::ooxml::error::{OoxmlError, Result};
use crate::sheet::{Sheet, SheetInfo};

/// Axes a chart resolves to when written. Never more than three.
pub type ResolvedAxes = SmallVec<[Axis; 3]>;

/// A chart definition: type, series, axes.
///
/// The chart owns its series and axes. Series and axes are addressed by
/// their position in the respective list.
///
/// # Examples
///
/// ```rust
/// use sheetchart::ooxml::charts::{Chart, ChartType, AxisKind};
///
/// let mut chart = Chart::new();
/// chart.set_chart_type(ChartType::Bar);
///
/// // No axes configured: a category and a value axis are synthesized.
/// let axes = chart.resolved_axes().unwrap();
/// assert_eq!(axes.len(), 2);
/// assert_eq!(axes[0].kind, AxisKind::Category);
/// assert_eq!(chart.axis_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chart {
    /// Chart type; `None` writes an empty plot area
    pub chart_type: Option<ChartType>,
    /// Chart style
    pub style: ChartStyle,
    /// Series, in output order
    pub series: Vec<Series>,
    /// Configured axes, in output order
    pub axes: Vec<Axis>,
    host: Option<SheetInfo>,
}

impl Chart {
    /// Create an empty chart with no type.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty chart hosted on a sheet.
    ///
    /// The host is the default data source for series derivation.
    #[inline]
    pub fn for_sheet(sheet: &dyn Sheet) -> Self {
        Self {
            host: Some(SheetInfo::from_sheet(sheet)),
            ..Self::default()
        }
    }

    /// The sheet hosting this chart.
    #[inline]
    pub fn host_sheet(&self) -> Option<&SheetInfo> {
        self.host.as_ref()
    }

    /// Set the chart type. Only supported types are written.
    #[inline]
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = Some(chart_type);
    }

    /// Set the chart style. Only scatter charts read it.
    #[inline]
    pub fn set_chart_style(&mut self, style: ChartStyle) {
        self.style = style;
    }

    /// Append an axis.
    #[inline]
    pub fn add_axis(&mut self, axis: Axis) {
        self.axes.push(axis);
    }

    /// Remove all configured axes.
    #[inline]
    pub fn clear_axes(&mut self) {
        self.axes.clear();
    }

    /// Number of configured axes (synthesized ones are not counted).
    #[inline]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// The configured axis at `index`.
    #[inline]
    pub fn axis(&self, index: usize) -> Option<&Axis> {
        self.axes.get(index)
    }

    /// All series.
    #[inline]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The axes that would be written for this chart.
    ///
    /// An empty axis list is replaced by the default set for the chart type.
    /// Pie-family charts and unset or reserved types resolve to no axes
    /// regardless of configuration. The chart is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`OoxmlError::InvalidAxisCount`] if the configured axes do not
    /// fit the chart type.
    pub fn resolved_axes(&self) -> Result<ResolvedAxes> {
        let Some(chart_type) = self.chart_type.filter(ChartType::is_supported) else {
            return Ok(ResolvedAxes::new());
        };
        let Some(allowed) = chart_type.axis_count_range() else {
            return Ok(ResolvedAxes::new());
        };
        if chart_type.is_axisless() {
            return Ok(ResolvedAxes::new());
        }

        let axes = if self.axes.is_empty() {
            default_axes(chart_type)
        } else {
            self.axes.iter().cloned().collect()
        };

        if !allowed.contains(&axes.len()) {
            return Err(OoxmlError::InvalidAxisCount {
                chart_type,
                expected: if chart_type.is_3d() { "2 or 3" } else { "exactly 2" },
                found: axes.len(),
            });
        }

        Ok(axes)
    }

    /// Store the synthesized default axes when none are configured.
    ///
    /// After this call [`Chart::axis_count`] reflects what gets written.
    /// Configured axes are only validated, never replaced.
    pub fn materialize_axes(&mut self) -> Result<()> {
        let resolved = self.resolved_axes()?;
        if self.axes.is_empty() {
            self.axes.extend(resolved);
        }
        Ok(())
    }
}

/// Default axes for a chart type that takes axes.
fn default_axes(chart_type: ChartType) -> ResolvedAxes {
    let mut axes = ResolvedAxes::new();

    // Scatter plots numbers against numbers
    let horizontal = if chart_type == ChartType::Scatter {
        AxisKind::Value
    } else {
        AxisKind::Category
    };
    axes.push(Axis::new(horizontal, AxisPosition::Bottom, 0, 1));
    axes.push(Axis::new(AxisKind::Value, AxisPosition::Left, 1, 0));

    if matches!(
        chart_type,
        ChartType::Bar3D | ChartType::Line3D | ChartType::Area3D
    ) {
        axes.push(Axis::new(AxisKind::Series, AxisPosition::Bottom, 2, 0));
    }

    axes
}
