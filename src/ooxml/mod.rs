//! Office Open XML (OOXML) parts handled by this crate.
//!
//! Only the chart part of a spreadsheet package is implemented; the package
//! container and relationships are left to the caller.
pub mod charts;
pub mod error;

pub use error::{OoxmlError, Result};
