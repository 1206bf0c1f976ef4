//! Loader error types.

use crate::config::ConfigError;
use crate::issues::ParseError;
use thiserror::Error;

/// Errors that can occur while loading issues from the tracker.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The page URL could not be parsed.
    #[error("Invalid page URL '{url}': {source}")]
    InvalidPageUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The page URL carries no `jql` query parameter.
    #[error("Page URL '{url}' has no jql query parameter")]
    MissingJql { url: String },

    /// The search endpoint URL could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP client or transport error.
    #[error("Search request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The tracker answered with a non-success status.
    #[error("Search request returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a search response.
    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An issue in the response was malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
