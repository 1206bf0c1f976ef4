//! Normalised issue record.

use super::StatusCategory;
use crate::timeline::days_between;
use chrono::NaiveDate;

/// An issue reduced to what the timeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Issue key (e.g. "PROJ-123").
    pub key: String,

    /// One-line summary.
    pub summary: String,

    /// First day of work.
    pub start_date: NaiveDate,

    /// Due date, if the issue has one.
    pub end_date: Option<NaiveDate>,

    /// Status bucket.
    pub status: StatusCategory,
}

impl Issue {
    /// Text drawn next to the issue's bar.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.key, self.summary)
    }

    /// Days from start to due date. Zero when there is no due date.
    #[must_use]
    pub fn elapsed_days(&self) -> i64 {
        self.end_date
            .map_or(0, |end| days_between(self.start_date, end))
    }
}
