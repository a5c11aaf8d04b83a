//! Metrics document error types
//!
//! Shape problems in a fetched document. These are recoverable: the page that
//! needs the category shows a "no data" message, other pages are unaffected.

use thiserror::Error;

/// Errors describing a document that does not match the backend contract
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataShapeError {
    /// The category key is absent from the document
    #[error("Missing metrics category: {0}")]
    MissingCategory(String),

    /// The category is present but could not be parsed
    #[error("Malformed metrics category {category}: {reason}")]
    MalformedCategory { category: String, reason: String },

    /// A snapshot value is negative or not a finite number
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: f64 },
}

impl DataShapeError {
    /// Whether the page should render its empty state rather than an error
    pub fn is_no_data(&self) -> bool {
        matches!(self, DataShapeError::MissingCategory(_))
    }
}
