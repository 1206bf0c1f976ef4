//! Trigger outcome types.

use super::RunSummary;

/// Result of a single trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The timeline was rendered into the surface.
    Rendered(RunSummary),

    /// A newer trigger started before this one finished; nothing was rendered.
    Superseded {
        /// Generation of the abandoned trigger.
        generation: u64,
    },
}

impl RunOutcome {
    /// Returns the summary if the timeline was rendered.
    #[must_use]
    pub fn summary(&self) -> Option<&RunSummary> {
        match self {
            Self::Rendered(summary) => Some(summary),
            Self::Superseded { .. } => None,
        }
    }
}
