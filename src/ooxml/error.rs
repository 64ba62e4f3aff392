//! Error types for chart part reading and writing.

use thiserror::Error;

use crate::ooxml::charts::types::ChartType;

/// Result type for chart codec operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for chart codec operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// The configured axis list does not fit the chart type.
    ///
    /// Raised by the writer before any output is produced. This is a caller
    /// configuration fault, never a property of the data.
    #[error("{chart_type} requires {expected} axes, but {found} are configured")]
    InvalidAxisCount {
        chart_type: ChartType,
        expected: &'static str,
        found: usize,
    },

    /// Malformed cell reference
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for OoxmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
