//! High-level session API for the plan-driven research chat.
//!
//! [`Session`] is the single entry point a front end talks to. It owns the
//! [`Transcript`] behind an async mutex and schedules the timed
//! continuations (plan generation, plan execution) on the tokio runtime.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Session     │    │  Continuations  │    │   Transcript    │
//! │ (review ops,    │───▶│ (compose,       │───▶│ (validated      │
//! │  read model)    │    │  execute)       │    │  transitions)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Caller-facing         Timer-driven           Owned state
//! ```
//!
//! Every mutation, whether it comes from the caller or from a running
//! continuation, takes the lock, applies one transition to the transcript and
//! releases it. A skip or edit that lands while execution sleeps on an
//! earlier step is therefore never lost, and execution reads each step's
//! current status right before running it.
//!
//! Invalid operations (unknown IDs, wrong plan or step status) are logged at
//! debug level and ignored: review methods return `false`, continuation
//! constructors return `None`.
//!
//! # Usage Examples
//!
//! ```rust
//! use able_core::{config::Pacing, SessionBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionBuilder::new()
//!     .with_pacing(Pacing::instant())
//!     .build()?;
//!
//! let composing = session.submit_query("Scan AI in logistics").await.unwrap();
//! let plan_id = composing.wait().await?.unwrap();
//!
//! session.approve_step(plan_id, 1).await;
//! session.skip_step(plan_id, 4).await;
//!
//! let execution = session.execute_plan(plan_id).await.unwrap();
//! execution.wait().await?;
//!
//! for message in session.snapshot().await.messages() {
//!     println!("{message}");
//! }
//! # Ok(())
//! # }
//! ```

use std::{path::Path, sync::Arc};

use log::{debug, info, warn};
use tokio::sync::Mutex;

mod builder;
mod continuation;
mod execution;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;
pub use continuation::Continuation;

use crate::{
    config::Pacing,
    error::Result,
    export::{self, ExportFormat},
    timer::Timer,
    transcript::{ReplyAction, Transcript},
};

/// Mutable session state, guarded by one lock.
#[derive(Debug, Default)]
struct State {
    transcript: Transcript,
    /// Queries whose plan has not been appended yet
    composing: usize,
    initial_query_taken: bool,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<State>,
    pacing: Pacing,
    timer: Timer,
}

impl Shared {
    /// Applies one transcript operation under the lock. Rejections are
    /// logged and turned into `None`.
    async fn apply<T>(
        &self,
        action: &str,
        op: impl FnOnce(&mut Transcript) -> Result<T>,
    ) -> Option<T> {
        let mut state = self.state.lock().await;
        match op(&mut state.transcript) {
            Ok(value) => Some(value),
            Err(e) if e.is_rejection() => {
                debug!("Ignoring {action}: {e}");
                None
            }
            Err(e) => {
                warn!("Failed to {action}: {e}");
                None
            }
        }
    }
}

/// One conversation: its messages, their plans and the tasks working on
/// them. Clones share the same session.
#[derive(Debug, Clone)]
pub struct Session {
    shared: Arc<Shared>,
}

impl Session {
    pub(crate) fn new(pacing: Pacing) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State::default()),
                pacing,
                timer: Timer::new(),
            }),
        }
    }

    pub fn pacing(&self) -> Pacing {
        self.shared.pacing
    }

    /// Appends the user's message and schedules the plan reply.
    ///
    /// Blank input is ignored and yields `None`. Otherwise the returned
    /// continuation resolves to the ID of the plan message once it has been
    /// appended, after the configured thinking delay.
    pub async fn submit_query(&self, text: &str) -> Option<Continuation<Option<u64>>> {
        if text.trim().is_empty() {
            debug!("Ignoring blank query");
            return None;
        }

        {
            let mut state = self.shared.state.lock().await;
            if self.shared.timer.is_cancelled() {
                debug!("Ignoring query after shutdown");
                return None;
            }
            state.transcript.push_user(text);
            state.composing += 1;
        }

        let shared = Arc::clone(&self.shared);
        let query = text.to_string();
        Some(Continuation::spawn(async move {
            execution::compose(shared, query).await
        }))
    }

    /// Submits a query handed over from the home screen, after the hand-off
    /// delay. Only the first non-blank initial query of a session is honored.
    pub async fn submit_initial_query(&self, text: &str) -> Option<Continuation<Option<u64>>> {
        if text.trim().is_empty() {
            return None;
        }
        {
            let mut state = self.shared.state.lock().await;
            if self.shared.timer.is_cancelled() {
                debug!("Ignoring initial query after shutdown");
                return None;
            }
            if state.initial_query_taken {
                debug!("Ignoring repeated initial query");
                return None;
            }
            state.initial_query_taken = true;
        }

        let session = self.clone();
        let query = text.to_string();
        Some(Continuation::spawn(async move {
            session
                .shared
                .timer
                .sleep(session.shared.pacing.handoff())
                .await
                .ok()?;
            let composing = session.submit_query(&query).await?;
            composing.wait().await.ok().flatten()
        }))
    }

    /// Approves a pending step of an awaiting plan.
    pub async fn approve_step(&self, message_id: u64, step_id: u64) -> bool {
        self.shared
            .apply("approve step", |t| t.approve_step(message_id, step_id))
            .await
            .is_some()
    }

    /// Skips a pending step of an awaiting plan; it will never run.
    pub async fn skip_step(&self, message_id: u64, step_id: u64) -> bool {
        self.shared
            .apply("skip step", |t| t.skip_step(message_id, step_id))
            .await
            .is_some()
    }

    /// Replaces a step's description, whatever its status.
    pub async fn edit_step_description(&self, message_id: u64, step_id: u64, text: &str) -> bool {
        self.shared
            .apply("edit step", |t| {
                t.edit_step_description(message_id, step_id, text)
            })
            .await
            .is_some()
    }

    /// Approves every pending step of an awaiting plan. Returns the number of
    /// steps that changed.
    pub async fn approve_all_pending(&self, message_id: u64) -> usize {
        self.shared
            .apply("approve all", |t| t.approve_all_pending(message_id))
            .await
            .unwrap_or(0)
    }

    /// Starts executing an awaiting plan with at least one approved step.
    ///
    /// Every step that is not skipped runs, in creation order, one at a time.
    /// The returned continuation resolves to the ID of the completion message.
    /// Execution cannot be aborted once started.
    pub async fn execute_plan(&self, message_id: u64) -> Option<Continuation<Option<u64>>> {
        let step_ids = {
            let mut state = self.shared.state.lock().await;
            if self.shared.timer.is_cancelled() {
                debug!("Ignoring execution of message {message_id} after shutdown");
                return None;
            }
            match state.transcript.begin_execution(message_id) {
                Ok(step_ids) => step_ids,
                Err(e) => {
                    debug!("Ignoring execute plan: {e}");
                    return None;
                }
            }
        };
        info!(
            "Executing plan in message {message_id} ({} steps)",
            step_ids.len()
        );

        let shared = Arc::clone(&self.shared);
        Some(Continuation::spawn(async move {
            execution::run(shared, message_id, step_ids).await
        }))
    }

    /// Ordered copy of every message and plan, for rendering.
    pub async fn snapshot(&self) -> Transcript {
        self.shared.state.lock().await.transcript.clone()
    }

    /// True while at least one submitted query is still waiting for its plan.
    pub async fn is_composing(&self) -> bool {
        self.shared.state.lock().await.composing > 0
    }

    /// Whether [`Session::execute_plan`] would start the plan.
    pub async fn can_execute(&self, message_id: u64) -> bool {
        self.shared.state.lock().await.transcript.can_execute(message_id)
    }

    pub async fn can_save_to_project(&self) -> bool {
        self.shared
            .state
            .lock()
            .await
            .transcript
            .can_save_to_project()
    }

    /// Resolves the suggested reply at `index` (0-based) on a message.
    pub async fn select_reply(&self, message_id: u64, index: usize) -> Option<ReplyAction> {
        let state = self.shared.state.lock().await;
        match state.transcript.select_reply(message_id, index) {
            Ok(action) => Some(action),
            Err(e) => {
                debug!("Ignoring reply selection: {e}");
                None
            }
        }
    }

    /// Writes the current transcript to `path`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::FileSystem` if the file cannot be written
    /// Returns `SessionError::Serialization` if JSON encoding fails
    pub async fn export(&self, format: ExportFormat, path: &Path) -> Result<()> {
        let transcript = self.snapshot().await;
        export::write_transcript(&transcript, format, path)
    }

    /// Cancels every pending delay. Continuations that were waiting stop
    /// without touching the transcript further; plans that were running stay
    /// `running`. New queries and executions are refused from then on, while
    /// review operations keep working.
    pub fn shutdown(&self) {
        info!("Shutting down session");
        self.shared.timer.cancel();
    }

    /// True once [`Session::shutdown`] has been called.
    pub fn is_shut_down(&self) -> bool {
        self.shared.timer.is_cancelled()
    }
}
