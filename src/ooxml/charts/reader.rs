//! Chart XML reader.
//!
//! A forward-only, recursive-descent pass over a chart part. Elements are
//! matched by local name, so any namespace prefix is accepted. Anything not
//! understood is skipped as a whole subtree; nothing is required.
//!
//! Axis titles, legends and text properties are not reconstructed.

use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, warn};

use crate::common::RGBColor;
use crate::common::xml::resolve_predefined_entity;
use crate::ooxml::charts::axis::Axis;
use crate::ooxml::charts::chart::Chart;
use crate::ooxml::charts::series::Series;
use crate::ooxml::charts::shape::{Fill, Line, ShapeStyle};
use crate::ooxml::charts::types::{AxisKind, AxisPosition, ChartStyle, ChartType, MarkerType};
use crate::ooxml::error::{OoxmlError, Result};

/// Reader options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartReaderOptions {
    /// Trim whitespace around text events.
    ///
    /// Off by default: trimming can eat spaces next to entity references
    /// inside quoted sheet names. Reference text is trimmed as a whole either way.
    pub trim_text: bool,
}

impl Default for ChartReaderOptions {
    fn default() -> Self {
        Self { trim_text: false }
    }
}

impl ChartReaderOptions {
    /// Create default options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether text events are trimmed.
    #[inline]
    pub fn with_trim_text(mut self, trim_text: bool) -> Self {
        self.trim_text = trim_text;
        self
    }
}

/// Parse a chart part into a new [`Chart`].
///
/// # Examples
///
/// ```rust
/// use sheetchart::ooxml::charts::{parse_chart, ChartType};
///
/// let xml = r#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart">
///   <c:chart><c:plotArea><c:barChart>
///     <c:ser><c:val><c:numRef><c:f>Sheet1!$B$2:$B$5</c:f></c:numRef></c:val></c:ser>
///   </c:barChart></c:plotArea></c:chart>
/// </c:chartSpace>"#;
///
/// let chart = parse_chart(xml.as_bytes()).unwrap();
/// assert_eq!(chart.chart_type, Some(ChartType::Bar));
/// assert_eq!(chart.series()[0].values(), Some("Sheet1!$B$2:$B$5"));
/// ```
pub fn parse_chart<R: BufRead>(reader: R) -> Result<Chart> {
    parse_chart_with_options(reader, &ChartReaderOptions::default())
}

/// Parse a chart part into a new [`Chart`] with custom options.
pub fn parse_chart_with_options<R: BufRead>(
    reader: R,
    options: &ChartReaderOptions,
) -> Result<Chart> {
    let mut chart = Chart::new();
    read_chart_into_with_options(reader, &mut chart, options)?;
    Ok(chart)
}

/// Populate an existing chart from a chart part.
///
/// Series and axes are appended. The host sheet is kept, and so is the
/// chart type when the part names an unsupported one.
pub fn read_chart_into<R: BufRead>(reader: R, chart: &mut Chart) -> Result<()> {
    read_chart_into_with_options(reader, chart, &ChartReaderOptions::default())
}

/// Populate an existing chart from a chart part with custom options.
pub fn read_chart_into_with_options<R: BufRead>(
    reader: R,
    chart: &mut Chart,
    options: &ChartReaderOptions,
) -> Result<()> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(options.trim_text);

    let mut root_open = false;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match xml.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                // Descend into the root in place
                b"chartSpace" => root_open = true,
                b"chart" => read_chart_element(&mut xml, chart)?,
                _ => skip_subtree(&mut xml)?,
            },
            // closing chartSpace
            Event::End(_) => root_open = false,
            Event::Eof if root_open => return Err(truncated("chartSpace")),
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(())
}

fn truncated(scope: &str) -> OoxmlError {
    OoxmlError::Xml(format!("unexpected end of document inside <{}>", scope))
}

/// One step inside an element's content.
enum Child<'b> {
    /// A child element; the flag is set for self-closing elements
    Element(BytesStart<'b>, bool),
    /// The current element's end tag
    End,
    /// Text, comments and the like
    Other,
}

/// Read the next step inside `scope`. End of stream there is an error.
fn next_child<'b, R: BufRead>(
    xml: &mut Reader<R>,
    buf: &'b mut Vec<u8>,
    scope: &str,
) -> Result<Child<'b>> {
    Ok(match xml.read_event_into(buf)? {
        Event::Start(e) => Child::Element(e, false),
        Event::Empty(e) => Child::Element(e, true),
        Event::End(_) => Child::End,
        Event::Eof => return Err(truncated(scope)),
        _ => Child::Other,
    })
}

/// Consume the rest of an element whose start tag was just read.
///
/// Stops after the matching end tag.
fn skip_subtree<R: BufRead>(xml: &mut Reader<R>) -> Result<()> {
    let mut depth = 1usize;
    let mut buf = Vec::new();
    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            },
            Event::Eof => return Err(truncated("skipped element")),
            _ => {},
        }
        buf.clear();
    }
    Ok(())
}

/// Skip the content of a non-empty element we only needed the attributes of.
#[inline]
fn finish<R: BufRead>(xml: &mut Reader<R>, empty: bool) -> Result<()> {
    if empty { Ok(()) } else { skip_subtree(xml) }
}

#[inline]
fn get_attr(e: &BytesStart, name: &[u8]) -> Option<Vec<u8>> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.local_name().as_ref() == name)
        .map(|a| a.value.to_vec())
}

#[inline]
fn parse_u32_attr(e: &BytesStart, name: &[u8]) -> Option<u32> {
    let raw = get_attr(e, name)?;
    let parsed = atoi_simd::parse::<u32, false, false>(&raw).ok();
    if parsed.is_none() {
        debug!(value = %String::from_utf8_lossy(&raw), "ignoring non-numeric attribute");
    }
    parsed
}

#[inline]
fn parse_f64_attr(e: &BytesStart, name: &[u8]) -> Option<f64> {
    let raw = get_attr(e, name)?;
    let parsed = fast_float2::parse::<f64, _>(&raw).ok();
    if parsed.is_none() {
        debug!(value = %String::from_utf8_lossy(&raw), "ignoring non-numeric attribute");
    }
    parsed
}

/// Collect the text content of the current element, decoding references.
fn read_text<R: BufRead>(xml: &mut Reader<R>) -> Result<String> {
    let mut text = String::new();
    let mut buf = Vec::new();
    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(std::str::from_utf8(&e)?),
            Event::CData(e) => text.push_str(std::str::from_utf8(&e)?),
            Event::GeneralRef(r) => {
                let resolved = r
                    .resolve_char_ref()
                    .ok()
                    .flatten()
                    .or_else(|| resolve_predefined_entity(&r));
                match resolved {
                    Some(ch) => text.push(ch),
                    None => debug!(entity = %String::from_utf8_lossy(&r), "unknown entity dropped"),
                }
            },
            Event::Start(_) => skip_subtree(xml)?,
            Event::End(_) => break,
            Event::Eof => return Err(truncated("f")),
            _ => {},
        }
        buf.clear();
    }
    Ok(text.trim().to_owned())
}

fn read_chart_element<R: BufRead>(xml: &mut Reader<R>, chart: &mut Chart) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match next_child(xml, &mut buf, "chart")? {
            Child::Element(e, empty) => match e.local_name().as_ref() {
                b"plotArea" if !empty => read_plot_area(xml, chart)?,
                // legend, title, view3D, ...
                _ => finish(xml, empty)?,
            },
            Child::End => break,
            Child::Other => {},
        }
    }
    Ok(())
}

fn read_plot_area<R: BufRead>(xml: &mut Reader<R>, chart: &mut Chart) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match next_child(xml, &mut buf, "plotArea")? {
            Child::Element(e, empty) => {
                let name = e.local_name();
                let name = name.as_ref();
                if name.ends_with(b"Chart") {
                    match ChartType::from_element_name(name) {
                        Some(chart_type) => chart.chart_type = Some(chart_type),
                        None => warn!(
                            element = %String::from_utf8_lossy(name),
                            "unsupported chart type, keeping the previous one"
                        ),
                    }
                    if !empty {
                        read_type_group(xml, chart)?;
                    }
                } else if name.ends_with(b"Ax") {
                    let axis = Axis::new(AxisKind::from_element_name(name), AxisPosition::Top, 0, 0);
                    let axis = if empty { axis } else { read_axis(xml, axis)? };
                    chart.axes.push(axis);
                } else {
                    finish(xml, empty)?;
                }
            },
            Child::End => break,
            Child::Other => {},
        }
    }
    Ok(())
}

/// Content of a `*Chart` element.
fn read_type_group<R: BufRead>(xml: &mut Reader<R>, chart: &mut Chart) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match next_child(xml, &mut buf, "chart type")? {
            Child::Element(e, empty) => match e.local_name().as_ref() {
                b"ser" => {
                    let series = if empty { Series::default() } else { read_series(xml)? };
                    chart.series.push(series);
                },
                b"scatterStyle" => {
                    let is_line = get_attr(&e, b"val").is_some_and(|v| v == b"line");
                    if is_line && chart.chart_type == Some(ChartType::Scatter) {
                        chart.style = ChartStyle::Line;
                    }
                    finish(xml, empty)?;
                },
                // axId links are rebuilt from the axes themselves
                _ => finish(xml, empty)?,
            },
            Child::End => break,
            Child::Other => {},
        }
    }
    Ok(())
}

fn read_series<R: BufRead>(xml: &mut Reader<R>) -> Result<Series> {
    let mut series = Series::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match next_child(xml, &mut buf, "ser")? {
            Child::Element(_, true) => {},
            Child::Element(e, false) => match e.local_name().as_ref() {
                b"cat" | b"xVal" => series.category_source = read_data_reference(xml)?,
                b"val" | b"yVal" => series.value_source = read_data_reference(xml)?,
                b"marker" => series.marker = read_marker(xml)?,
                b"spPr" => series.shape = Some(read_shape(xml)?),
                // tx, dLbls, extLst, ...
                _ => skip_subtree(xml)?,
            },
            Child::End => break,
            Child::Other => {},
        }
    }
    Ok(series)
}

/// Content of `cat`/`val`/`xVal`/`yVal`: the formula of the first reference.
///
/// String references are accepted as well as numeric ones.
fn read_data_reference<R: BufRead>(xml: &mut Reader<R>) -> Result<Option<String>> {
    let mut formula = None;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match next_child(xml, &mut buf, "data source")? {
            Child::Element(e, false) => match e.local_name().as_ref() {
                b"numRef" | b"strRef" => {
                    let found = read_reference_formula(xml)?;
                    if formula.is_none() {
                        formula = found;
                    }
                },
                // numLit/strLit: inline values are not modelled
                _ => skip_subtree(xml)?,
            },
            Child::Element(_, true) | Child::Other => {},
            Child::End => break,
        }
    }
    Ok(formula)
}

/// Content of `numRef`/`strRef`: the `f` text, ignoring the value cache.
fn read_reference_formula<R: BufRead>(xml: &mut Reader<R>) -> Result<Option<String>> {
    let mut formula = None;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match next_child(xml, &mut buf, "reference")? {
            Child::Element(e, false) => {
                if e.local_name().as_ref() == b"f" {
                    formula = Some(read_text(xml)?);
                } else {
                    skip_subtree(xml)?;
                }
            },
            Child::Element(_, true) | Child::Other => {},
            Child::End => break,
        }
    }
    Ok(formula)
}

fn read_marker<R: BufRead>(xml: &mut Reader<R>) -> Result<MarkerType> {
    let mut marker = MarkerType::Default;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match next_child(xml, &mut buf, "marker")? {
            Child::Element(e, empty) => {
                if e.local_name().as_ref() == b"symbol" {
                    if let Some(val) = get_attr(&e, b"val") {
                        marker = MarkerType::from_xml_value(&val).unwrap_or_else(|| {
                            debug!(symbol = %String::from_utf8_lossy(&val), "unknown marker symbol");
                            MarkerType::Default
                        });
                    }
                }
                // size, spPr
                finish(xml, empty)?;
            },
            Child::End => break,
            Child::Other => {},
        }
    }
    Ok(marker)
}

/// Content of `spPr`.
fn read_shape<R: BufRead>(xml: &mut Reader<R>) -> Result<ShapeStyle> {
    let mut shape = ShapeStyle::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match next_child(xml, &mut buf, "spPr")? {
            Child::Element(e, empty) => {
                let name = e.local_name();
                let name = name.as_ref();
                if name.ends_with(b"Fill") {
                    if !empty {
                        shape.area.color = read_fill_color(xml)?;
                    }
                } else if name == b"ln" {
                    shape.line = read_line(xml, &e, empty)?;
                } else {
                    finish(xml, empty)?;
                }
            },
            Child::End => break,
            Child::Other => {},
        }
    }
    Ok(shape)
}

fn read_line<R: BufRead>(xml: &mut Reader<R>, e: &BytesStart, empty: bool) -> Result<Line> {
    let mut line = Line::default();
    if let Some(width) = parse_u32_attr(e, b"w") {
        line.width = width;
    }
    if empty {
        return Ok(line);
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        match next_child(xml, &mut buf, "ln")? {
            Child::Element(child, child_empty) => {
                if child.local_name().as_ref().ends_with(b"Fill") && !child_empty {
                    line.fill = Fill {
                        color: read_fill_color(xml)?,
                        ..line.fill
                    };
                } else {
                    // prstDash, round, headEnd, ...
                    finish(xml, child_empty)?;
                }
            },
            Child::End => break,
            Child::Other => {},
        }
    }
    Ok(line)
}

/// Content of a `*Fill` element: the last `srgbClr` colour anywhere inside.
///
/// Gradient stops and pattern colours nest the colour deeper than a solid fill.
fn read_fill_color<R: BufRead>(xml: &mut Reader<R>) -> Result<Option<RGBColor>> {
    let mut color = None;
    let mut depth = 1usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let (e, empty) = match xml.read_event_into(&mut buf)? {
            Event::Start(e) => (e, false),
            Event::Empty(e) => (e, true),
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                continue;
            },
            Event::Eof => return Err(truncated("fill")),
            _ => continue,
        };
        if !empty {
            depth += 1;
        }
        // schemeClr, prstClr, alpha modifiers, ...
        if e.local_name().as_ref() == b"srgbClr" {
            let parsed = get_attr(&e, b"val")
                .and_then(|v| std::str::from_utf8(&v).ok().and_then(RGBColor::from_hex));
            if parsed.is_none() {
                debug!("srgbClr without a usable colour value");
            }
            color = parsed;
        }
    }
    Ok(color)
}

/// Content of a `*Ax` element.
fn read_axis<R: BufRead>(xml: &mut Reader<R>, mut axis: Axis) -> Result<Axis> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match next_child(xml, &mut buf, "axis")? {
            Child::Element(e, empty) => {
                match e.local_name().as_ref() {
                    b"axPos" => {
                        if let Some(val) = get_attr(&e, b"val") {
                            axis.position = AxisPosition::from_xml_value(&val);
                        }
                    },
                    b"axId" => axis.id = parse_u32_attr(&e, b"val").unwrap_or(axis.id),
                    b"crossAx" => axis.cross_id = parse_u32_attr(&e, b"val").unwrap_or(axis.cross_id),
                    b"scaling" if !empty => {
                        read_scaling(xml, &mut axis)?;
                        continue;
                    },
                    // title is write-only
                    _ => {},
                }
                finish(xml, empty)?;
            },
            Child::End => break,
            Child::Other => {},
        }
    }
    Ok(axis)
}

fn read_scaling<R: BufRead>(xml: &mut Reader<R>, axis: &mut Axis) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match next_child(xml, &mut buf, "scaling")? {
            Child::Element(e, empty) => {
                match e.local_name().as_ref() {
                    b"min" => axis.min = parse_f64_attr(&e, b"val"),
                    b"max" => axis.max = parse_f64_attr(&e, b"val"),
                    _ => {},
                }
                finish(xml, empty)?;
            },
            Child::End => break,
            Child::Other => {},
        }
    }
    Ok(())
}
