//! Sheet and cell-range addressing consumed by series derivation.
//!
//! Only the pieces a chart needs live here: a rectangular [`CellRange`] that
//! can be printed as an absolute reference, and a [`Sheet`] identity used to
//! qualify those references.

pub mod range;
pub mod types;

pub use range::{CellRange, MAX_COLUMNS, MAX_ROWS, column_to_letters, letters_to_column};
pub use types::{Sheet, SheetInfo, SheetKind, escape_sheet_name};
