//! Cancellation of superseded triggers.
//!
//! Every trigger gets its own [`CancellationToken`]. Starting a new trigger
//! cancels the previous one, so a slow load that finishes after a newer one
//! started is dropped instead of overwriting the newer timeline.

use std::sync::{Mutex, PoisonError};
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};
use tracing::debug;

/// Hands out triggers and cancels the one in flight when a new one starts.
#[derive(Debug, Default)]
pub struct TriggerCoordinator {
    current: Mutex<Current>,
}

#[derive(Debug, Default)]
struct Current {
    generation: u64,
    token: Option<CancellationToken>,
}

impl TriggerCoordinator {
    /// Creates a coordinator with no trigger in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new trigger, cancelling the previous one.
    pub fn begin(&self) -> Trigger {
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = current.token.take() {
            if !previous.is_cancelled() {
                debug!(generation = current.generation, "Cancelling superseded trigger");
            }
            previous.cancel();
        }

        current.generation += 1;
        let token = CancellationToken::new();
        current.token = Some(token.clone());

        Trigger {
            generation: current.generation,
            token,
        }
    }

    /// Generation number of the most recent trigger, 0 before the first.
    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
    }
}

/// One user-initiated timeline request.
#[derive(Debug, Clone)]
pub struct Trigger {
    generation: u64,
    token: CancellationToken,
}

impl Trigger {
    /// Sequence number of this trigger, starting at 1.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a newer trigger has started since this one.
    #[must_use]
    pub fn is_superseded(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes once a newer trigger starts.
    pub fn superseded(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}
