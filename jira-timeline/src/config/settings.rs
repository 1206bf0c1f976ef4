//! Timeline settings deserialization.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Largest page size the search endpoint accepts.
const MAX_RESULTS_LIMIT: u32 = 1000;

/// Settings for talking to the tracker and writing the timeline.
///
/// Parsed from a kebab-case `timeline.toml`:
///
/// ```toml
/// base-url = "https://jira.example.com"
/// start-date-field = "customfield_11104"
/// max-results = 250
/// output = "timeline.html"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TimelineConfig {
    /// Root URL of the tracker (e.g. "https://jira.example.com").
    ///
    /// May be left out of the file when supplied on the command line.
    #[serde(default)]
    pub base_url: String,

    /// Search endpoint path, relative to `base_url`.
    #[serde(default = "default_search_path")]
    pub search_path: String,

    /// Field id holding the issue start date.
    #[serde(default = "default_start_date_field")]
    pub start_date_field: String,

    /// Maximum number of issues requested.
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Path of the rendered surface.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Username for basic auth. Bearer auth is used when absent.
    pub username: Option<String>,

    /// Environment variable holding the API token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Drop issues without a start date instead of failing the load.
    #[serde(default)]
    pub skip_unscheduled: bool,

    /// Request timeout in seconds. No timeout when absent.
    pub timeout_secs: Option<u64>,
}

pub(crate) fn default_search_path() -> String {
    "rest/api/latest/search".to_string()
}

pub(crate) fn default_start_date_field() -> String {
    "customfield_11104".to_string()
}

pub(crate) fn default_max_results() -> u32 {
    250
}

pub(crate) fn default_output() -> PathBuf {
    PathBuf::from("jira-timeline.html")
}

pub(crate) fn default_token_env() -> String {
    "JIRA_TOKEN".to_string()
}

impl TimelineConfig {
    /// Creates settings for the given tracker with every other value defaulted.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            search_path: default_search_path(),
            start_date_field: default_start_date_field(),
            max_results: default_max_results(),
            output: default_output(),
            username: None,
            token_env: default_token_env(),
            skip_unscheduled: false,
            timeout_secs: None,
        }
    }

    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, malformed,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate(path)?;
        Ok(config)
    }

    /// Reads settings from a TOML file without validating them.
    pub(crate) fn read(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading timeline settings");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Validates the settings.
    ///
    /// `origin` only names where the settings came from in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem found.
    pub fn validate(&self, origin: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: origin.display().to_string(),
            message,
        };

        if self.base_url.trim().is_empty() {
            return Err(invalid("base-url cannot be empty".to_string()));
        }

        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(invalid(format!(
                    "base-url must be http or https, got '{}'",
                    url.scheme()
                )))
            }
            Err(e) => return Err(invalid(format!("base-url is not a valid URL: {e}"))),
        }

        if self.start_date_field.trim().is_empty() {
            return Err(invalid("start-date-field cannot be empty".to_string()));
        }

        if self.max_results == 0 || self.max_results > MAX_RESULTS_LIMIT {
            return Err(invalid(format!(
                "max-results must be between 1 and {MAX_RESULTS_LIMIT}, got {}",
                self.max_results
            )));
        }

        Ok(())
    }

    /// Returns the full search endpoint URL.
    ///
    /// The search path is resolved relative to the base URL, so a tracker
    /// served under a context path (e.g. "/jira") keeps it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL cannot be built.
    pub fn search_url(&self) -> Result<Url, ConfigError> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let invalid = |source: url::ParseError| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        };

        Url::parse(&base)
            .and_then(|url| url.join(self.search_path.trim_start_matches('/')))
            .map_err(invalid)
    }

    /// Reads the API token from the environment variable named by `token_env`.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}
