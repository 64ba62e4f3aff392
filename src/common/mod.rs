//! Common types and utilities shared by the chart codec.

pub mod style;
pub mod xml;

pub use style::RGBColor;
