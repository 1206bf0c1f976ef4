//! Run summary types.

use crate::timeline::{GridLineKind, Timeline};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Summary of a rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Query the timeline was built from.
    pub jql: String,

    /// Date the timeline treats as today.
    pub today: NaiveDate,

    /// Number of issues loaded.
    pub issues: usize,

    /// Number of issues drawn as bars.
    pub bars: usize,

    /// Number of issues drawn as zero-length markers.
    pub markers: usize,

    /// Number of month gridlines.
    pub month_lines: usize,

    /// Number of week gridlines.
    pub week_lines: usize,

    /// Where the timeline was written.
    pub surface: PathBuf,
}

impl RunSummary {
    /// Summarises a rendered timeline.
    #[must_use]
    pub fn new(
        jql: &str,
        today: NaiveDate,
        issues: usize,
        timeline: &Timeline,
        surface: PathBuf,
    ) -> Self {
        Self {
            jql: jql.to_string(),
            today,
            issues,
            bars: timeline.bar_count(),
            markers: timeline.marker_count(),
            month_lines: timeline.grid_line_count(GridLineKind::Month),
            week_lines: timeline.grid_line_count(GridLineKind::Week),
            surface,
        }
    }

    /// One-line description shown above the timeline.
    #[must_use]
    pub fn caption(&self) -> String {
        let noun = if self.issues == 1 { "issue" } else { "issues" };
        format!("{} {noun} as of {}", self.issues, self.today.format("%Y-%m-%d"))
    }
}
