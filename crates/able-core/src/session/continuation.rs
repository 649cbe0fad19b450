//! Handle to a delayed continuation running on the tokio runtime.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::error::{Result, SessionError};

/// A scheduled piece of session work.
///
/// Dropping the handle does not stop the work; the continuation keeps
/// running and its effects still land in the transcript.
#[derive(Debug)]
pub struct Continuation<T> {
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> Continuation<T> {
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Waits for the continuation to finish.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Task` if the task panicked
    pub async fn wait(self) -> Result<T> {
        self.handle.await.map_err(|e| SessionError::Task {
            message: e.to_string(),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
