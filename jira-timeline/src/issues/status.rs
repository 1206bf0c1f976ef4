//! Status category types.

/// Coarse lifecycle bucket of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// Work not started.
    ToDo,

    /// Work underway.
    InProgress,

    /// Work finished.
    Done,

    /// Any category the tracker reports that is not one of the above.
    Other,
}

impl StatusCategory {
    /// Maps the tracker's status-category name onto a bucket.
    ///
    /// Unrecognised names map to [`StatusCategory::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "To Do" => Self::ToDo,
            "In Progress" => Self::InProgress,
            "Done" => Self::Done,
            _ => Self::Other,
        }
    }

    /// Returns the stylesheet class for bars and markers in this bucket.
    ///
    /// [`StatusCategory::Other`] has no dedicated class and falls back to the
    /// base `bar` style.
    #[must_use]
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::ToDo => Some("status-bar-todo"),
            Self::InProgress => Some("status-bar-inprogress"),
            Self::Done => Some("status-bar-done"),
            Self::Other => None,
        }
    }
}
