//! Chart XML writer.
//!
//! Produces a complete chart part (`xl/charts/chartN.xml`) in a single pass.
//! Element order follows the DrawingML chart schema sequences.

use std::io::Write;

use crate::common::xml::escape_xml;
use crate::ooxml::charts::axis::Axis;
use crate::ooxml::charts::chart::Chart;
use crate::ooxml::charts::series::Series;
use crate::ooxml::charts::shape::{Fill, ShapeStyle};
use crate::ooxml::charts::types::{ChartStyle, ChartType};
use crate::ooxml::error::Result;

/// DrawingML chart namespace (`c:`).
pub const CHART_NAMESPACE: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
/// DrawingML main namespace (`a:`).
pub const DRAWING_NAMESPACE: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
/// Office relationships namespace (`r:`).
pub const RELATIONSHIPS_NAMESPACE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Doughnut hole size in percent of the outer radius.
const DOUGHNUT_HOLE_SIZE: u32 = 50;

/// Options controlling chart XML output.
///
/// # Examples
///
/// ```rust
/// use sheetchart::ooxml::charts::ChartWriterOptions;
///
/// let options = ChartWriterOptions::new().with_xml_declaration(false);
/// assert!(!options.xml_declaration);
/// assert!(options.write_layout);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartWriterOptions {
    /// Emit the `<?xml ...?>` declaration
    pub xml_declaration: bool,
    /// Emit an empty `c:layout` (automatic layout) in the plot area
    pub write_layout: bool,
}

impl Default for ChartWriterOptions {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            write_layout: true,
        }
    }
}

impl ChartWriterOptions {
    /// Create default options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the XML declaration is written.
    #[inline]
    pub fn with_xml_declaration(mut self, xml_declaration: bool) -> Self {
        self.xml_declaration = xml_declaration;
        self
    }

    /// Set whether the plot area layout element is written.
    #[inline]
    pub fn with_layout(mut self, write_layout: bool) -> Self {
        self.write_layout = write_layout;
        self
    }
}

/// Write a chart part.
///
/// The chart is not modified; missing axes are synthesized on the fly.
///
/// # Errors
///
/// Fails with [`OoxmlError::InvalidAxisCount`](crate::ooxml::OoxmlError::InvalidAxisCount)
/// before anything is written when the configured axes do not fit the chart
/// type, and with an I/O error if the writer fails.
pub fn write_chart<W: Write>(writer: &mut W, chart: &Chart) -> Result<()> {
    write_chart_with_options(writer, chart, &ChartWriterOptions::default())
}

/// Write a chart part with custom options.
pub fn write_chart_with_options<W: Write>(
    writer: &mut W,
    chart: &Chart,
    options: &ChartWriterOptions,
) -> Result<()> {
    let axes = chart.resolved_axes()?;

    if options.xml_declaration {
        write!(
            writer,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
        )?;
    }
    write!(
        writer,
        r#"<c:chartSpace xmlns:c="{}" xmlns:a="{}" xmlns:r="{}">"#,
        CHART_NAMESPACE, DRAWING_NAMESPACE, RELATIONSHIPS_NAMESPACE
    )?;
    write!(writer, "<c:chart><c:plotArea>")?;

    if options.write_layout {
        write!(writer, "<c:layout/>")?;
    }

    if let Some(chart_type) = chart.chart_type {
        write_type_group(writer, chart, chart_type, &axes)?;
        for axis in &axes {
            write_axis(writer, axis)?;
        }
    }

    write!(writer, "</c:plotArea></c:chart></c:chartSpace>")?;
    Ok(())
}

/// Serialize a chart part to a string.
///
/// # Examples
///
/// ```rust
/// use sheetchart::ooxml::charts::{chart_to_xml, Chart, ChartType};
///
/// let mut chart = Chart::new();
/// chart.set_chart_type(ChartType::Pie);
/// let xml = chart_to_xml(&chart).unwrap();
/// assert!(xml.contains(r#"<c:pieChart><c:varyColors val="1"/></c:pieChart>"#));
/// ```
pub fn chart_to_xml(chart: &Chart) -> Result<String> {
    let mut out = Vec::new();
    write_chart(&mut out, chart)?;
    Ok(String::from_utf8(out).map_err(|e| e.utf8_error())?)
}

/// Write the chart-type element. Reserved types write nothing.
fn write_type_group<W: Write>(
    writer: &mut W,
    chart: &Chart,
    chart_type: ChartType,
    axes: &[Axis],
) -> Result<()> {
    let name = chart_type.xml_element_name();
    match chart_type {
        ChartType::Pie | ChartType::Pie3D => {
            write!(writer, r#"<c:{}><c:varyColors val="1"/>"#, name)?;
            write_all_series(writer, chart, chart_type)?;
        },
        ChartType::Doughnut => {
            write!(writer, r#"<c:{}><c:varyColors val="1"/>"#, name)?;
            write_all_series(writer, chart, chart_type)?;
            write!(writer, r#"<c:holeSize val="{}"/>"#, DOUGHNUT_HOLE_SIZE)?;
        },
        ChartType::Bar | ChartType::Bar3D => {
            write!(writer, r#"<c:{}><c:barDir val="col"/>"#, name)?;
            write_all_series(writer, chart, chart_type)?;
            write_axis_ids(writer, axes)?;
        },
        ChartType::Line | ChartType::Line3D | ChartType::Area | ChartType::Area3D => {
            write!(writer, r#"<c:{}><c:grouping val="standard"/>"#, name)?;
            write_all_series(writer, chart, chart_type)?;
            write_axis_ids(writer, axes)?;
        },
        ChartType::Scatter => {
            write!(writer, "<c:{}>", name)?;
            match chart.style {
                ChartStyle::Line => write!(writer, r#"<c:scatterStyle val="line"/>"#)?,
                ChartStyle::Default => write!(writer, "<c:scatterStyle/>")?,
            }
            write_all_series(writer, chart, chart_type)?;
            write_axis_ids(writer, axes)?;
        },
        ChartType::Stock
        | ChartType::Radar
        | ChartType::OfPie
        | ChartType::Surface
        | ChartType::Surface3D
        | ChartType::Bubble => return Ok(()),
    }
    write!(writer, "</c:{}>", name)?;
    Ok(())
}

fn write_axis_ids<W: Write>(writer: &mut W, axes: &[Axis]) -> Result<()> {
    for axis in axes {
        write!(writer, r#"<c:axId val="{}"/>"#, axis.id)?;
    }
    Ok(())
}

fn write_all_series<W: Write>(writer: &mut W, chart: &Chart, chart_type: ChartType) -> Result<()> {
    for (index, series) in chart.series.iter().enumerate() {
        write_series(writer, index, series, chart_type)?;
    }
    Ok(())
}

fn write_series<W: Write>(
    writer: &mut W,
    index: usize,
    series: &Series,
    chart_type: ChartType,
) -> Result<()> {
    write!(
        writer,
        r#"<c:ser><c:idx val="{0}"/><c:order val="{0}"/>"#,
        index
    )?;

    if let Some(shape) = series.styled_shape() {
        write_shape(writer, shape)?;
    }

    if let Some(symbol) = series.marker.xml_value().filter(|_| chart_type.supports_markers()) {
        write!(
            writer,
            r#"<c:marker><c:symbol val="{}"/></c:marker>"#,
            symbol
        )?;
    }

    let (category_tag, value_tag) = if chart_type.uses_xy_values() {
        ("xVal", "yVal")
    } else {
        ("cat", "val")
    };
    if let Some(source) = series.category() {
        write_reference(writer, category_tag, source)?;
    }
    if let Some(source) = series.values() {
        write_reference(writer, value_tag, source)?;
    }

    write!(writer, "</c:ser>")?;
    Ok(())
}

fn write_reference<W: Write>(writer: &mut W, tag: &str, formula: &str) -> Result<()> {
    write!(
        writer,
        "<c:{0}><c:numRef><c:f>{1}</c:f></c:numRef></c:{0}>",
        tag,
        escape_xml(formula)
    )?;
    Ok(())
}

fn write_shape<W: Write>(writer: &mut W, shape: &ShapeStyle) -> Result<()> {
    write!(writer, "<c:spPr>")?;

    if !shape.area.is_default() {
        write_fill(writer, &shape.area)?;
    }

    if !shape.line.is_default() {
        write!(writer, r#"<a:ln w="{}">"#, shape.line.width)?;
        if !shape.line.fill.is_default() {
            write_fill(writer, &shape.line.fill)?;
        }
        write!(writer, "</a:ln>")?;
    }

    write!(writer, "</c:spPr>")?;
    Ok(())
}

fn write_fill<W: Write>(writer: &mut W, fill: &Fill) -> Result<()> {
    let tag = fill.style.xml_element_name();
    match fill.color {
        Some(color) => write!(
            writer,
            r#"<a:{0}><a:srgbClr val="{1}"/></a:{0}>"#,
            tag,
            color.to_hex()
        )?,
        None => write!(writer, "<a:{}/>", tag)?,
    }
    Ok(())
}

fn write_axis<W: Write>(writer: &mut W, axis: &Axis) -> Result<()> {
    let name = axis.kind.xml_element_name();
    write!(writer, r#"<c:{}><c:axId val="{}"/>"#, name, axis.id)?;

    write!(writer, r#"<c:scaling><c:orientation val="minMax"/>"#)?;
    if let Some(max) = axis.max() {
        write!(writer, r#"<c:max val="{}"/>"#, max)?;
    }
    if let Some(min) = axis.min() {
        write!(writer, r#"<c:min val="{}"/>"#, min)?;
    }
    write!(writer, "</c:scaling>")?;

    write!(writer, r#"<c:axPos val="{}"/>"#, axis.position.xml_value())?;

    if let Some(title) = axis.title() {
        write!(
            writer,
            "<c:title><c:tx><c:rich><a:p><a:r><a:t>{}</a:t></a:r></a:p></c:rich></c:tx></c:title>",
            escape_xml(title)
        )?;
    }

    write!(writer, r#"<c:crossAx val="{}"/></c:{}>"#, axis.cross_id, name)?;
    Ok(())
}
