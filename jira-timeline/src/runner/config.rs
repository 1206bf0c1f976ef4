//! Runner configuration.

use crate::config::TimelineConfig;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Configuration for running the timeline renderer.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Tracker and output settings.
    settings: TimelineConfig,
    /// API token; falls back to the settings' token variable when absent.
    token: Option<String>,
    /// Fixed "today"; the system clock is used when absent.
    today: Option<NaiveDate>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(settings: TimelineConfig) -> Self {
        Self {
            settings,
            token: None,
            today: None,
        }
    }

    /// Sets an explicit API token.
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Pins the date the timeline treats as today.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Sets a custom surface path.
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.settings.output = output;
        self
    }

    /// Returns the tracker settings.
    pub fn settings(&self) -> &TimelineConfig {
        &self.settings
    }

    /// Returns the explicit token, or the one named by the settings.
    pub fn token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| self.settings.resolve_token())
    }

    /// Returns the pinned date, if any.
    pub fn today(&self) -> Option<NaiveDate> {
        self.today
    }

    /// Returns the surface path.
    pub fn output(&self) -> &Path {
        &self.settings.output
    }
}
