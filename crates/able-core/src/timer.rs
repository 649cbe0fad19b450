//! Cancellable delays for the session's timed continuations.
//!
//! Every delay the session waits on (plan "thinking", step execution, the
//! initial-query hand-off) goes through a [`Timer`]. Clones share one
//! cancellation token, so cancelling any clone wakes every pending sleep.

use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Returned by [`Timer::sleep`] when the timer was cancelled first.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("timer cancelled")]
pub struct Cancelled;

#[derive(Debug, Clone, Default)]
pub struct Timer {
    token: CancellationToken,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for `duration` unless the timer is cancelled first.
    pub async fn sleep(&self, duration: Duration) -> Result<(), Cancelled> {
        if self.token.is_cancelled() {
            return Err(Cancelled);
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(Cancelled),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
