//! Issue loading from the tracker's search API.
//!
//! This module performs the single search request behind a timeline and maps
//! the response into [`Issue`] records.

mod error;
mod page;
mod request;

pub use error::LoadError;
pub use page::jql_from_page_url;
pub use request::SearchRequest;

use crate::config::TimelineConfig;
use crate::issues::{map_search_response, Issue, SearchResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, info_span, Instrument};
use url::Url;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("jira-timeline/", env!("CARGO_PKG_VERSION"));

/// Credentials attached to the search request.
#[derive(Debug, Clone)]
enum Credentials {
    None,
    Bearer(String),
    Basic { username: String, token: String },
}

/// Loads issues for a query.
#[derive(Debug, Clone)]
pub struct IssueLoader {
    client: Client,
    search_url: Url,
    start_date_field: String,
    max_results: u32,
    skip_unscheduled: bool,
    credentials: Credentials,
}

impl IssueLoader {
    /// Builds a loader from the settings and an optional API token.
    ///
    /// With a token, requests use bearer auth, or basic auth when the settings
    /// name a username.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the search URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &TimelineConfig, token: Option<String>) -> Result<Self, LoadError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let credentials = match (token, &config.username) {
            (Some(token), Some(username)) => Credentials::Basic {
                username: username.clone(),
                token,
            },
            (Some(token), None) => Credentials::Bearer(token),
            (None, _) => Credentials::None,
        };

        Ok(Self {
            client: builder.build()?,
            search_url: config.search_url()?,
            start_date_field: config.start_date_field.clone(),
            max_results: config.max_results,
            skip_unscheduled: config.skip_unscheduled,
            credentials,
        })
    }

    /// The endpoint searches are sent to.
    #[must_use]
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Runs one search and maps the results.
    ///
    /// An empty result set is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] on transport failure, a non-success status, an
    /// undecodable body, or a malformed issue.
    pub async fn load(&self, jql: &str) -> Result<Vec<Issue>, LoadError> {
        let span = info_span!("load", jql = %jql, url = %self.search_url);

        async {
            let body = SearchRequest::new(jql, self.max_results, &self.start_date_field);
            debug!(max_results = body.max_results, fields = ?body.fields, "Sending search request");

            let request = self.client.post(self.search_url.clone()).json(&body);
            let request = match &self.credentials {
                Credentials::None => request,
                Credentials::Bearer(token) => request.bearer_auth(token),
                Credentials::Basic { username, token } => {
                    request.basic_auth(username, Some(token))
                }
            };

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = match response.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        debug!(status = status.as_u16(), error = %e, "Failed to read error body");
                        String::new()
                    }
                };
                return Err(LoadError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let text = response.text().await?;
            let parsed: SearchResponse = serde_json::from_str(&text)?;
            let issues =
                map_search_response(parsed, &self.start_date_field, self.skip_unscheduled)?;

            info!(count = issues.len(), "Loaded issues");
            Ok(issues)
        }
        .instrument(span)
        .await
    }
}
