//! Cross-module tests: derivation, writing and reading together.

use std::io::{BufReader, Seek, SeekFrom, Write};

use super::*;
use crate::common::RGBColor;
use crate::ooxml::OoxmlError;
use crate::sheet::{CellRange, SheetInfo};

fn round_trip(chart: &Chart) -> Chart {
    let xml = chart_to_xml(chart).unwrap();
    parse_chart(xml.as_bytes()).unwrap()
}

fn bar_chart() -> Chart {
    let mut chart = Chart::for_sheet(&SheetInfo::worksheet("Sheet1"));
    chart.set_chart_type(ChartType::Bar);
    chart
}

#[test]
fn test_bar_round_trip_synthesizes_axes() {
    let mut chart = bar_chart();
    chart.add_series(&CellRange::new(1, 2, 8, 3), None, MarkerType::Default, None);
    assert_eq!(chart.series().len(), 2);

    let parsed = round_trip(&chart);
    assert_eq!(parsed.chart_type, Some(ChartType::Bar));
    assert_eq!(parsed.series(), chart.series());

    let axes: Vec<_> = parsed.axes.iter().map(|a| (a.id, a.kind, a.cross_id)).collect();
    assert_eq!(axes, [(0, AxisKind::Category, 1), (1, AxisKind::Value, 0)]);
}

#[test]
fn test_bar_with_single_axis_fails() {
    let mut chart = bar_chart();
    chart.add_axis(Axis::new(AxisKind::Category, AxisPosition::Bottom, 0, 1));
    assert!(matches!(
        chart_to_xml(&chart),
        Err(OoxmlError::InvalidAxisCount {
            chart_type: ChartType::Bar,
            found: 1,
            ..
        })
    ));
}

#[test]
fn test_axis_count_checked_before_output() {
    let mut chart = Chart::for_sheet(&SheetInfo::worksheet("Sheet1"));
    chart.set_chart_type(ChartType::Area3D);
    for id in 0..4 {
        chart.add_axis(Axis::new(AxisKind::Value, AxisPosition::Left, id, 0));
    }

    let mut out = Vec::new();
    let err = write_chart(&mut out, &chart).unwrap_err();
    assert!(matches!(err, OoxmlError::InvalidAxisCount { expected: "2 or 3", found: 4, .. }));
    assert!(out.is_empty());

    chart.set_chart_type(ChartType::Scatter);
    chart.axes.truncate(3);
    assert!(matches!(
        chart_to_xml(&chart),
        Err(OoxmlError::InvalidAxisCount {
            chart_type: ChartType::Scatter,
            expected: "exactly 2",
            found: 3,
        })
    ));
}

#[test]
fn test_default_shape_is_omitted_and_colour_round_trips() {
    let mut chart = bar_chart();
    chart.add_series(
        &CellRange::new(1, 1, 5, 1),
        None,
        MarkerType::Default,
        Some(ShapeStyle::default()),
    );
    let red = ShapeStyle::new().with_area(Fill::solid(RGBColor::from_hex("#FF0000").unwrap()));
    chart.add_series(&CellRange::new(1, 2, 5, 2), None, MarkerType::Default, Some(red));

    let xml = chart_to_xml(&chart).unwrap();
    assert_eq!(xml.matches("<c:spPr>").count(), 1);
    assert!(xml.contains(r#"<a:srgbClr val="FF0000"/>"#));

    let parsed = parse_chart(xml.as_bytes()).unwrap();
    assert_eq!(parsed.series()[0].shape, None);
    assert_eq!(parsed.series()[1].shape, Some(red));
}

#[test]
fn test_unknown_type_then_supported_siblings() {
    let xml = r#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart">
      <c:chart><c:plotArea><c:layout/>
        <c:bubbleChart><c:varyColors val="0"/><c:ser><c:bubbleSize/></c:ser><c:axId val="1"/></c:bubbleChart>
        <c:valAx><c:axId val="1"/><c:axPos val="b"/><c:crossAx val="2"/></c:valAx>
        <c:valAx><c:axId val="2"/><c:axPos val="l"/><c:crossAx val="1"/></c:valAx>
      </c:plotArea></c:chart></c:chartSpace>"#;
    let chart = parse_chart(xml.as_bytes()).unwrap();
    assert_eq!(chart.chart_type, None);
    assert_eq!(chart.series().len(), 1);
    assert_eq!(chart.axis_count(), 2);
    assert_eq!(chart.axis(1).map(|a| a.position), Some(AxisPosition::Left));
}

#[test]
fn test_pie_ignores_configured_axes() {
    let mut chart = Chart::new();
    chart.set_chart_type(ChartType::Pie);
    chart.series.push(Series::new("S!$A$1:$A$5"));
    chart.add_axis(Axis::new(AxisKind::Category, AxisPosition::Bottom, 0, 1));

    let xml = chart_to_xml(&chart).unwrap();
    assert!(xml.contains(r#"<c:pieChart><c:varyColors val="1"/>"#));
    for tag in ["<c:catAx>", "<c:valAx>", "<c:dateAx>", "<c:serAx>", "<c:axId"] {
        assert!(!xml.contains(tag), "unexpected {tag}");
    }
}

#[test]
fn test_scatter_full_round_trip() {
    let mut chart = Chart::for_sheet(&SheetInfo::worksheet("Lab Data"));
    chart.set_chart_type(ChartType::Scatter);
    chart.set_chart_style(ChartStyle::Line);
    let shape = ShapeStyle::new()
        .with_line(Line::new(19_050).with_fill(Fill::solid(RGBColor::new(0x33, 0x66, 0x99))));
    chart.add_series(&CellRange::new(2, 1, 30, 3), None, MarkerType::Star, Some(shape));
    chart.add_axis(
        Axis::new(AxisKind::Value, AxisPosition::Bottom, 100, 200)
            .with_title("Time")
            .with_bounds(Some(0.0), Some(60.0)),
    );
    chart.add_axis(Axis::new(AxisKind::Value, AxisPosition::Left, 200, 100).with_bounds(None, Some(7.25)));

    let parsed = round_trip(&chart);
    assert_eq!(parsed.chart_type, Some(ChartType::Scatter));
    assert_eq!(parsed.style, ChartStyle::Line);
    assert_eq!(parsed.series(), chart.series());
    assert_eq!(parsed.series()[0].category(), Some("'Lab Data'!$A$2:$A$30"));

    // titles are not read back
    let mut expected = chart.axes.clone();
    expected[0].title = None;
    assert_eq!(parsed.axes, expected);
}

#[test]
fn test_area3d_materialized_axes_write_identically() {
    let mut chart = Chart::for_sheet(&SheetInfo::worksheet("S"));
    chart.set_chart_type(ChartType::Area3D);
    chart.add_series(&CellRange::new(1, 1, 3, 6), None, MarkerType::Default, None);
    assert_eq!(chart.series().len(), 3);

    let before = chart_to_xml(&chart).unwrap();
    chart.materialize_axes().unwrap();
    assert_eq!(chart.axis_count(), 3);
    assert_eq!(chart_to_xml(&chart).unwrap(), before);

    let parsed = round_trip(&chart);
    assert_eq!(parsed.axes, chart.axes);
}

#[test]
fn test_quoted_sheet_names_survive() {
    let mut chart = Chart::new();
    chart.set_chart_type(ChartType::Line);
    let sheet = SheetInfo::worksheet("Q1 & Q2's");
    chart.add_series(&CellRange::new(1, 1, 1, 4), Some(&sheet), MarkerType::None, None);

    let parsed = round_trip(&chart);
    assert_eq!(parsed.series()[0].values(), Some("'Q1 & Q2''s'!$A$1:$D$1"));
    assert_eq!(parsed.series()[0].marker, MarkerType::None);
}

#[test]
fn test_file_backed_round_trip() {
    let mut chart = bar_chart();
    chart.set_chart_type(ChartType::Doughnut);
    chart.add_series(&CellRange::new(3, 2, 3, 9), None, MarkerType::Default, None);

    let mut file = tempfile::tempfile().unwrap();
    write_chart(&mut file, &chart).unwrap();
    file.flush().unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let parsed = parse_chart(BufReader::new(file)).unwrap();
    assert_eq!(parsed.chart_type, Some(ChartType::Doughnut));
    assert_eq!(parsed.series()[0].values(), Some("Sheet1!$B$3:$I$3"));
    assert_eq!(parsed.axis_count(), 0);
}

#[test]
fn test_write_options() {
    let chart = bar_chart();
    let mut out = Vec::new();
    write_chart_with_options(
        &mut out,
        &chart,
        &ChartWriterOptions::new().with_xml_declaration(false).with_layout(false),
    )
    .unwrap();
    let xml = String::from_utf8(out).unwrap();
    assert!(xml.starts_with("<c:chartSpace"));
    assert!(!xml.contains("<c:layout/>"));

    let parsed = parse_chart_with_options(xml.as_bytes(), &ChartReaderOptions::new().with_trim_text(true)).unwrap();
    assert_eq!(parsed.axis_count(), 2);
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a valid range of up to 20 x 20 cells.
    fn range_strategy() -> impl Strategy<Value = CellRange> {
        (1u32..5000, 1u32..=20, 1u32..500, 1u32..=20).prop_map(|(row, rows, col, cols)| {
            CellRange::new(row, col, row + rows - 1, col + cols - 1)
        })
    }

    fn chart_type_strategy() -> impl Strategy<Value = ChartType> {
        prop_oneof![
            Just(ChartType::Bar),
            Just(ChartType::Line),
            Just(ChartType::Area3D),
            Just(ChartType::Pie),
            Just(ChartType::Doughnut),
            Just(ChartType::Scatter),
            Just(ChartType::Bubble),
        ]
    }

    fn reference(range: &CellRange) -> String {
        format!("Data!{}", range.to_absolute_string())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_single_line_is_one_series(
            range in range_strategy(),
            chart_type in chart_type_strategy(),
            by_row in any::<bool>(),
        ) {
            let range = if by_row {
                range.row_slice(range.first_row())
            } else {
                range.column_slice(range.first_column())
            };
            let out = derive_series(&range, "Data", Some(chart_type), MarkerType::Default, None);

            prop_assert_eq!(out.len(), 1);
            let expected = reference(&range);
            prop_assert_eq!(out[0].values(), Some(expected.as_str()));
            prop_assert_eq!(out[0].category(), None);
        }

        #[test]
        fn prop_orientation_follows_longer_side(
            range in range_strategy(),
            chart_type in chart_type_strategy(),
        ) {
            let rows = range.row_count();
            let columns = range.column_count();
            prop_assume!(rows > 1 && columns > 1);

            let out = derive_series(&range, "Data", Some(chart_type), MarkerType::Square, None);
            let shared = u32::from(chart_type.uses_xy_values());

            if columns < rows {
                prop_assert_eq!(out.len() as u32, columns - shared);
                for (series, col) in out.iter().zip(range.first_column() + shared..) {
                    let expected = reference(&range.column_slice(col));
                    prop_assert_eq!(series.values(), Some(expected.as_str()));
                }
            } else {
                prop_assert_eq!(out.len() as u32, rows - shared);
                for (series, row) in out.iter().zip(range.first_row() + shared..) {
                    let expected = reference(&range.row_slice(row));
                    prop_assert_eq!(series.values(), Some(expected.as_str()));
                }
            }
            prop_assert!(out.iter().all(|s| s.marker == MarkerType::Square));
        }

        #[test]
        fn prop_xy_series_share_first_line(range in range_strategy(), bubble in any::<bool>()) {
            prop_assume!(range.row_count() > 1 && range.column_count() > 1);
            let chart_type = if bubble { ChartType::Bubble } else { ChartType::Scatter };

            let out = derive_series(&range, "Data", Some(chart_type), MarkerType::Default, None);
            let shared = if range.column_count() < range.row_count() {
                range.column_slice(range.first_column())
            } else {
                range.row_slice(range.first_row())
            };
            let expected = reference(&shared);
            prop_assert!(out.iter().all(|s| s.category() == Some(expected.as_str())));
        }

        #[test]
        fn prop_derived_sources_round_trip(range in range_strategy(), chart_type in chart_type_strategy()) {
            let mut chart = Chart::for_sheet(&SheetInfo::worksheet("Data"));
            chart.set_chart_type(chart_type);
            chart.add_series(&range, None, MarkerType::Default, None);

            let xml = chart_to_xml(&chart).unwrap();
            let parsed = parse_chart(xml.as_bytes()).unwrap();
            if chart_type.is_supported() {
                prop_assert_eq!(parsed.series(), chart.series());
            } else {
                prop_assert!(parsed.series().is_empty());
            }
        }
    }
}
