//! Issue parsing error types.

use thiserror::Error;

/// Errors that can occur while turning a search response into issues.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A required field was absent or null.
    #[error("Issue {key} has no value for field '{field}'")]
    MissingField { key: String, field: String },

    /// A date field could not be parsed.
    #[error("Issue {key} has an invalid date in field '{field}': '{value}'")]
    InvalidDate {
        key: String,
        field: String,
        value: String,
    },
}
