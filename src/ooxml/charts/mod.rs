//! Chart parts for spreadsheet documents.
//!
//! This module reads and writes DrawingML chart markup (`xl/charts/chartN.xml`)
//! and derives data series from a rectangular cell selection. It includes:
//!
//! - The chart model: chart type, series, axes and shape styling
//! - Series derivation from a [`CellRange`](crate::sheet::CellRange)
//! - An XML reader tolerant of markup it does not understand
//! - An XML writer that synthesizes default axes
//!
//! # Chart Types Supported
//!
//! - Area charts (2D and 3D)
//! - Bar/Column charts (2D and 3D)
//! - Line charts (2D and 3D)
//! - Pie charts (2D and 3D)
//! - Doughnut charts
//! - Scatter/XY charts
//!
//! Stock, radar, of-pie, surface and bubble charts are reserved: they can be
//! named but are neither read nor written.
//!
//! # Example
//!
//! ```rust
//! use sheetchart::ooxml::charts::{chart_to_xml, parse_chart, Chart, ChartType, MarkerType};
//! use sheetchart::sheet::{CellRange, SheetInfo};
//!
//! // One line per column of B2:D20 on "Sales"
//! let mut chart = Chart::for_sheet(&SheetInfo::worksheet("Sales"));
//! chart.set_chart_type(ChartType::Line);
//! chart.add_series(&CellRange::new(2, 2, 20, 4), None, MarkerType::Circle, None);
//!
//! let xml = chart_to_xml(&chart)?;
//! let parsed = parse_chart(xml.as_bytes())?;
//! assert_eq!(parsed.series().len(), 3);
//! assert_eq!(parsed.axis_count(), 2);
//! # Ok::<(), sheetchart::ooxml::OoxmlError>(())
//! ```

pub mod axis;
pub mod chart;
pub mod derive;
pub mod reader;
pub mod series;
pub mod shape;
pub mod types;
pub mod writer;

#[cfg(test)]
mod tests;

pub use axis::Axis;
pub use chart::{Chart, ResolvedAxes};
pub use derive::derive_series;
pub use reader::{
    ChartReaderOptions, parse_chart, parse_chart_with_options, read_chart_into,
    read_chart_into_with_options,
};
pub use series::Series;
pub use shape::{DEFAULT_LINE_WIDTH, Fill, FillStyle, Line, ShapeStyle};
pub use types::{AxisKind, AxisPosition, ChartStyle, ChartType, MarkerType};
pub use writer::{ChartWriterOptions, chart_to_xml, write_chart, write_chart_with_options};
