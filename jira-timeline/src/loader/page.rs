//! Query extraction from tracker page URLs.

use super::LoadError;
use url::Url;

/// Returns the `jql` query parameter of a tracker page URL.
///
/// # Errors
///
/// Returns [`LoadError::InvalidPageUrl`] if the URL cannot be parsed and
/// [`LoadError::MissingJql`] if the parameter is absent or blank.
pub fn jql_from_page_url(page_url: &str) -> Result<String, LoadError> {
    let url = Url::parse(page_url).map_err(|e| LoadError::InvalidPageUrl {
        url: page_url.to_string(),
        source: e,
    })?;

    url.query_pairs()
        .find(|(name, _)| name == "jql")
        .map(|(_, value)| value.into_owned())
        .filter(|jql| !jql.trim().is_empty())
        .ok_or_else(|| LoadError::MissingJql {
            url: page_url.to_string(),
        })
}
