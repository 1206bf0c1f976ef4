//! Orchestrates timeline triggers.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::loader::{jql_from_page_url, IssueLoader};
use crate::render::Surface;
use crate::summary::{RunOutcome, RunSummary};
use crate::timeline::layout;
use crate::trigger::{Trigger, TriggerCoordinator};
use chrono::Utc;
use tracing::{error, info};

/// Loads, lays out, and renders timelines into one surface.
pub struct Runner {
    config: RunnerConfig,
    loader: IssueLoader,
    surface: Surface,
    triggers: TriggerCoordinator,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the HTTP client or the surface cannot be
    /// set up.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let loader = IssueLoader::new(config.settings(), config.token())?;
        let surface = Surface::create_or_reuse(config.output())?;
        Ok(Self {
            config,
            loader,
            surface,
            triggers: TriggerCoordinator::new(),
        })
    }

    /// The surface timelines are drawn into.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Renders the timeline for a tracker page URL carrying a `jql` parameter.
    ///
    /// The call supersedes any trigger in flight even when the URL carries
    /// no query.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Load`] if the URL has no query (after writing a
    /// failure notice), plus everything [`Runner::trigger`] returns.
    pub async fn trigger_from_page(&self, page_url: &str) -> Result<RunOutcome, RunnerError> {
        let trigger = self.triggers.begin();
        match jql_from_page_url(page_url) {
            Ok(jql) => self.trigger_with(&trigger, &jql).await,
            Err(e) => {
                error!(generation = trigger.generation(), page_url, error = %e, "No query on page");
                self.surface.show_failure(page_url, &e.to_string())?;
                Err(e.into())
            }
        }
    }

    /// Loads the issues matching `jql` and renders their timeline.
    ///
    /// Starting another trigger while this one is loading supersedes it: this
    /// call then returns [`RunOutcome::Superseded`] without touching the
    /// surface.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Load`] if loading fails, after replacing the
    /// surface with a failure notice, and [`RunnerError::Render`] if the
    /// surface cannot be written.
    pub async fn trigger(&self, jql: &str) -> Result<RunOutcome, RunnerError> {
        let trigger = self.triggers.begin();
        self.trigger_with(&trigger, jql).await
    }

    async fn trigger_with(&self, trigger: &Trigger, jql: &str) -> Result<RunOutcome, RunnerError> {
        let generation = trigger.generation();
        info!(generation, jql, "Timeline triggered");

        let loaded = tokio::select! {
            biased;
            () = trigger.superseded() => None,
            result = self.loader.load(jql) => Some(result),
        };

        let loaded = match loaded {
            Some(result) if !trigger.is_superseded() => result,
            _ => {
                info!(generation, "Trigger superseded, discarding results");
                return Ok(RunOutcome::Superseded { generation });
            }
        };

        let issues = match loaded {
            Ok(issues) => issues,
            Err(e) => {
                error!(generation, error = %e, "Failed to load issues");
                self.surface.show_failure(jql, &e.to_string())?;
                return Err(e.into());
            }
        };

        let today = self
            .config
            .today()
            .unwrap_or_else(|| Utc::now().date_naive());
        let timeline = layout(&issues, today);
        let summary = RunSummary::new(
            jql,
            today,
            issues.len(),
            &timeline,
            self.surface.path().to_path_buf(),
        );

        self.surface
            .show_timeline(jql, &summary.caption(), &timeline)?;
        Ok(RunOutcome::Rendered(summary))
    }
}
