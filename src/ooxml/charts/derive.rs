//! Series derivation from a cell-range selection.
//!
//! A rectangular selection is split into series along its longer side:
//! a tall block yields one series per column, a wide (or square) block one
//! series per row. Scatter and bubble charts use the first column or row as
//! the shared X values instead of plotting it.

use tracing::debug;

use crate::ooxml::charts::chart::Chart;
use crate::ooxml::charts::series::Series;
use crate::ooxml::charts::shape::ShapeStyle;
use crate::ooxml::charts::types::{ChartType, MarkerType};
use crate::sheet::{CellRange, Sheet, escape_sheet_name};

/// Build a sheet-qualified absolute reference, e.g. `'Q1 Sales'!$A$1:$A$9`.
#[inline]
fn qualified(sheet_name: &str, range: &CellRange) -> String {
    format!("{}!{}", sheet_name, range.to_absolute_string())
}

/// Split `range` into series.
///
/// `sheet_name` must already be escaped. An invalid range yields no series.
pub fn derive_series(
    range: &CellRange,
    sheet_name: &str,
    chart_type: Option<ChartType>,
    marker: MarkerType,
    shape: Option<ShapeStyle>,
) -> Vec<Series> {
    if !range.is_valid() {
        return Vec::new();
    }

    let make = |category: Option<&String>, values: &CellRange| Series {
        category_source: category.cloned(),
        value_source: Some(qualified(sheet_name, values)),
        marker,
        shape,
    };

    let rows = range.row_count();
    let columns = range.column_count();
    if rows == 1 || columns == 1 {
        return vec![make(None, range)];
    }

    let shared_x = chart_type.is_some_and(|t| t.uses_xy_values());

    if columns < rows {
        let mut first = range.first_column();
        let category = shared_x.then(|| {
            first += 1;
            qualified(sheet_name, &range.column_slice(range.first_column()))
        });
        (first..=range.last_column())
            .map(|col| make(category.as_ref(), &range.column_slice(col)))
            .collect()
    } else {
        let mut first = range.first_row();
        let category = shared_x.then(|| {
            first += 1;
            qualified(sheet_name, &range.row_slice(range.first_row()))
        });
        (first..=range.last_row())
            .map(|row| make(category.as_ref(), &range.row_slice(row)))
            .collect()
    }
}

impl Chart {
    /// Name of the sheet series should reference, escaped.
    ///
    /// Falls back to the host sheet; `None` when there is no usable worksheet.
    fn data_sheet_name(&self, sheet: Option<&dyn Sheet>) -> Option<String> {
        let sheet = match sheet {
            Some(sheet) => sheet,
            None => match self.host_sheet() {
                Some(host) => host as &dyn Sheet,
                None => {
                    debug!("no source sheet and no host sheet, series not added");
                    return None;
                },
            },
        };

        if !sheet.kind().is_worksheet() {
            debug!(sheet = sheet.name(), kind = ?sheet.kind(), "source is not a worksheet, series not added");
            return None;
        }

        Some(escape_sheet_name(sheet.name()).into_owned())
    }

    /// Derive series from `range` and append them.
    ///
    /// `sheet` defaults to the host sheet. An invalid range, a source sheet
    /// that is not a worksheet, or a missing sheet is silently ignored.
    /// Returns the number of series appended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sheetchart::ooxml::charts::{Chart, ChartType, MarkerType};
    /// use sheetchart::sheet::{CellRange, SheetInfo};
    ///
    /// let mut chart = Chart::for_sheet(&SheetInfo::worksheet("Sheet1"));
    /// chart.set_chart_type(ChartType::Line);
    /// chart.add_series(&CellRange::new(1, 1, 9, 3), None, MarkerType::Default, None);
    ///
    /// assert_eq!(chart.series().len(), 3);
    /// assert_eq!(chart.series()[0].values(), Some("Sheet1!$A$1:$A$9"));
    /// ```
    pub fn add_series(
        &mut self,
        range: &CellRange,
        sheet: Option<&dyn Sheet>,
        marker: MarkerType,
        shape: Option<ShapeStyle>,
    ) -> usize {
        if !range.is_valid() {
            debug!(?range, "invalid range, series not added");
            return 0;
        }
        let Some(sheet_name) = self.data_sheet_name(sheet) else {
            return 0;
        };

        let derived = derive_series(range, &sheet_name, self.chart_type, marker, shape);
        let added = derived.len();
        self.series.extend(derived);
        added
    }

    /// Append one series with explicit X (category) and Y (value) ranges.
    ///
    /// Both ranges must be valid; the sheet rules match [`Chart::add_series`].
    /// Returns whether a series was appended.
    pub fn add_xy_series(
        &mut self,
        x: &CellRange,
        y: &CellRange,
        sheet: Option<&dyn Sheet>,
        marker: MarkerType,
        shape: Option<ShapeStyle>,
    ) -> bool {
        if !x.is_valid() || !y.is_valid() {
            debug!(?x, ?y, "invalid range, series not added");
            return false;
        }
        let Some(sheet_name) = self.data_sheet_name(sheet) else {
            return false;
        };

        let series = Series {
            category_source: Some(qualified(&sheet_name, x)),
            value_source: Some(qualified(&sheet_name, y)),
            marker,
            shape,
        };
        self.series.push(series);
        true
    }
}
