//! Sheetchart - chart parts for spreadsheet documents
//!
//! This library reads and writes the DrawingML chart markup stored in XLSX
//! packages (`xl/charts/chartN.xml`), and builds chart series from a cell
//! range selection the way spreadsheet applications do.
//!
//! # Features
//!
//! - **Chart model**: area, bar, line (2D and 3D), pie, doughnut and scatter charts
//! - **Series derivation**: split a selection into row or column series
//! - **Axis synthesis**: sensible default axes when none are configured
//! - **Tolerant reader**: unknown markup is skipped, never fatal
//!
//! # Example - Writing a chart part
//!
//! ```
//! use sheetchart::ooxml::charts::{write_chart, Chart, ChartType, MarkerType};
//! use sheetchart::sheet::{CellRange, SheetInfo};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut chart = Chart::for_sheet(&SheetInfo::worksheet("Sheet1"));
//! chart.set_chart_type(ChartType::Bar);
//! chart.add_series(&CellRange::new(1, 1, 10, 2), None, MarkerType::Default, None);
//!
//! let mut part = Vec::new();
//! write_chart(&mut part, &chart)?;
//! assert!(String::from_utf8(part)?.contains("<c:barChart>"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading a chart part
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use sheetchart::ooxml::charts::parse_chart;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let chart = parse_chart(BufReader::new(File::open("chart1.xml")?))?;
//! for series in chart.series() {
//!     println!("{:?} -> {:?}", series.category(), series.values());
//! }
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod ooxml;
pub mod sheet;

pub use ooxml::charts::{Chart, ChartType};
pub use ooxml::{OoxmlError, Result};
