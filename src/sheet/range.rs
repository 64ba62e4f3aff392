//! Cell range addressing (A1 notation).
//!
//! Ranges are 1-based and inclusive on both ends, the way worksheet
//! coordinates are presented to users. A range carries no sheet; sheet
//! qualification happens when a reference string is built for a series.

use crate::ooxml::error::{OoxmlError, Result};
use std::fmt;
use std::str::FromStr;

/// Last addressable row of a worksheet.
pub const MAX_ROWS: u32 = 1_048_576;

/// Last addressable column of a worksheet (`XFD`).
pub const MAX_COLUMNS: u32 = 16_384;

/// Convert a 1-based column number to letters (1 -> "A", 26 -> "Z", 27 -> "AA").
///
/// # Examples
///
/// ```
/// use sheetchart::sheet::column_to_letters;
///
/// assert_eq!(column_to_letters(1), "A");
/// assert_eq!(column_to_letters(28), "AB");
/// assert_eq!(column_to_letters(16_384), "XFD");
/// ```
pub fn column_to_letters(column: u32) -> String {
    let mut letters = Vec::with_capacity(3);
    let mut col = column;

    while col > 0 {
        col -= 1;
        letters.push((col % 26) as u8 + b'A');
        col /= 26;
    }

    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Convert column letters to a 1-based column number ("A" -> 1, "AA" -> 27).
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(OoxmlError::InvalidReference(format!(
            "column '{}' must contain only letters",
            letters
        )));
    }

    let mut column = 0u32;
    for b in letters.bytes() {
        column = column
            .checked_mul(26)
            .and_then(|c| c.checked_add(u32::from(b.to_ascii_uppercase() - b'A') + 1))
            .ok_or_else(|| OoxmlError::InvalidReference(format!("column '{}' is too large", letters)))?;
    }

    Ok(column)
}

/// Parse one cell reference (`B3`, `$B$3`) into a 1-based `(row, column)` pair.
fn parse_cell(s: &str) -> Result<(u32, u32)> {
    let s = s.trim();
    let body = s.strip_prefix('$').unwrap_or(s);
    let split = body
        .find(|c: char| !c.is_ascii_alphabetic())
        .ok_or_else(|| OoxmlError::InvalidReference(format!("no row number in '{}'", s)))?;

    let column = letters_to_column(&body[..split])?;
    let digits = &body[split..];
    let digits = digits.strip_prefix('$').unwrap_or(digits);
    let row = atoi_simd::parse::<u32, false, false>(digits.as_bytes())
        .map_err(|_| OoxmlError::InvalidReference(format!("bad row number in '{}'", s)))?;

    Ok((row, column))
}

/// A rectangular block of cells.
///
/// A range is only meaningful when [`CellRange::is_valid`] holds; invalid
/// ranges can still be constructed so that callers further up can hand them
/// over and have them ignored.
///
/// # Examples
///
/// ```
/// use sheetchart::sheet::CellRange;
///
/// let range = CellRange::new(2, 1, 10, 3);
/// assert_eq!(range.row_count(), 9);
/// assert_eq!(range.column_count(), 3);
/// assert_eq!(range.to_absolute_string(), "$A$2:$C$10");
///
/// let parsed: CellRange = "A2:C10".parse().unwrap();
/// assert_eq!(parsed, range);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    first_row: u32,
    first_column: u32,
    last_row: u32,
    last_column: u32,
}

impl CellRange {
    /// Create a range from its first and last row/column (all 1-based, inclusive).
    #[inline]
    pub const fn new(first_row: u32, first_column: u32, last_row: u32, last_column: u32) -> Self {
        Self {
            first_row,
            first_column,
            last_row,
            last_column,
        }
    }

    /// A range covering a single cell.
    #[inline]
    pub const fn cell(row: u32, column: u32) -> Self {
        Self::new(row, column, row, column)
    }

    #[inline]
    pub const fn first_row(&self) -> u32 {
        self.first_row
    }

    #[inline]
    pub const fn first_column(&self) -> u32 {
        self.first_column
    }

    #[inline]
    pub const fn last_row(&self) -> u32 {
        self.last_row
    }

    #[inline]
    pub const fn last_column(&self) -> u32 {
        self.last_column
    }

    /// Whether the range is non-empty and inside the worksheet grid.
    pub const fn is_valid(&self) -> bool {
        self.first_row >= 1
            && self.first_column >= 1
            && self.first_row <= self.last_row
            && self.first_column <= self.last_column
            && self.last_row <= MAX_ROWS
            && self.last_column <= MAX_COLUMNS
    }

    /// Number of rows, or 0 for an inverted range.
    #[inline]
    pub const fn row_count(&self) -> u32 {
        if self.last_row >= self.first_row {
            self.last_row - self.first_row + 1
        } else {
            0
        }
    }

    /// Number of columns, or 0 for an inverted range.
    #[inline]
    pub const fn column_count(&self) -> u32 {
        if self.last_column >= self.first_column {
            self.last_column - self.first_column + 1
        } else {
            0
        }
    }

    /// The sub-range made of one column of this range.
    #[inline]
    pub const fn column_slice(&self, column: u32) -> Self {
        Self::new(self.first_row, column, self.last_row, column)
    }

    /// The sub-range made of one row of this range.
    #[inline]
    pub const fn row_slice(&self, row: u32) -> Self {
        Self::new(row, self.first_column, row, self.last_column)
    }

    /// Format as an absolute reference (`$A$1:$B$2`, or `$A$1` for a single cell).
    ///
    /// Returns an empty string for an invalid range.
    pub fn to_absolute_string(&self) -> String {
        self.format(true)
    }

    fn format(&self, absolute: bool) -> String {
        if !self.is_valid() {
            return String::new();
        }

        let marker = if absolute { "$" } else { "" };
        let first = format!(
            "{m}{}{m}{}",
            column_to_letters(self.first_column),
            self.first_row,
            m = marker
        );
        if self.first_row == self.last_row && self.first_column == self.last_column {
            return first;
        }

        format!(
            "{}:{m}{}{m}{}",
            first,
            column_to_letters(self.last_column),
            self.last_row,
            m = marker
        )
    }
}

impl Default for CellRange {
    /// An empty (invalid) range.
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl FromStr for CellRange {
    type Err = OoxmlError;

    /// Parse `A1:B3`, `$A$1:$B$3` or a single cell `A1`.
    fn from_str(s: &str) -> Result<Self> {
        let (first, last) = match s.split_once(':') {
            Some((a, b)) => (parse_cell(a)?, parse_cell(b)?),
            None => {
                let cell = parse_cell(s)?;
                (cell, cell)
            },
        };

        let range = Self::new(first.0, first.1, last.0, last.1);
        if !range.is_valid() {
            return Err(OoxmlError::InvalidReference(format!(
                "'{}' is not a valid range",
                s
            )));
        }
        Ok(range)
    }
}

impl fmt::Display for CellRange {
    /// Relative A1 notation (`A1:B2`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_to_letters(1), "A");
        assert_eq!(column_to_letters(26), "Z");
        assert_eq!(column_to_letters(27), "AA");
        assert_eq!(column_to_letters(52), "AZ");
        assert_eq!(column_to_letters(53), "BA");
        assert_eq!(column_to_letters(0), "");

        assert_eq!(letters_to_column("A").unwrap(), 1);
        assert_eq!(letters_to_column("az").unwrap(), 52);
        assert_eq!(letters_to_column("XFD").unwrap(), 16_384);
        assert!(letters_to_column("").is_err());
        assert!(letters_to_column("A1").is_err());
    }

    #[test]
    fn test_column_letters_inverse() {
        for col in 1..2000 {
            assert_eq!(letters_to_column(&column_to_letters(col)).unwrap(), col);
        }
    }

    #[test]
    fn test_validity() {
        assert!(CellRange::new(1, 1, 1, 1).is_valid());
        assert!(!CellRange::default().is_valid());
        assert!(!CellRange::new(5, 1, 4, 1).is_valid());
        assert!(!CellRange::new(1, 3, 1, 2).is_valid());
        assert!(!CellRange::new(1, 1, MAX_ROWS + 1, 1).is_valid());
        assert_eq!(CellRange::new(5, 1, 4, 1).row_count(), 0);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(CellRange::new(2, 1, 10, 1).to_absolute_string(), "$A$2:$A$10");
        assert_eq!(CellRange::cell(3, 28).to_absolute_string(), "$AB$3");
        assert_eq!(CellRange::new(1, 1, 2, 2).to_string(), "A1:B2");
        assert_eq!(CellRange::default().to_absolute_string(), "");
    }

    #[test]
    fn test_parse() {
        let range: CellRange = "$B$2:$D$7".parse().unwrap();
        assert_eq!(range, CellRange::new(2, 2, 7, 4));

        let range: CellRange = "c5".parse().unwrap();
        assert_eq!(range, CellRange::cell(5, 3));

        assert!("A0".parse::<CellRange>().is_err());
        assert!("B2:A1".parse::<CellRange>().is_err());
        assert!("12".parse::<CellRange>().is_err());
        assert!("A".parse::<CellRange>().is_err());
    }
}
