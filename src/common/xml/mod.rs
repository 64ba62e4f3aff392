//! XML text helpers shared by the chart reader and writer.

mod escape;

pub use escape::{escape_xml, resolve_predefined_entity};
