//! Error types for the session library.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{PlanStatus, StepStatus};

/// Comprehensive error type for all session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// No message with the given ID exists in the transcript
    #[error("Message with ID {id} not found")]
    MessageNotFound { id: u64 },
    /// The message exists but its plan has no step with the given ID
    #[error("Step {step_id} not found in message {message_id}")]
    StepNotFound { message_id: u64, step_id: u64 },
    /// A plan operation targeted a user or assistant message
    #[error("Message with ID {id} does not carry a plan")]
    NotAPlan { id: u64 },
    /// The requested step transition is not allowed by the step lifecycle
    #[error("Step {step_id} cannot move from {from} to {to}")]
    InvalidTransition {
        step_id: u64,
        from: StepStatus,
        to: StepStatus,
    },
    /// Review operations are only valid while the plan awaits execution
    #[error("Plan in message {id} is {status}, not awaiting")]
    PlanNotAwaiting { id: u64, status: PlanStatus },
    /// Execution steps are only valid while the plan is running
    #[error("Plan in message {id} is {status}, not running")]
    PlanNotRunning { id: u64, status: PlanStatus },
    /// The message has no suggested reply at the given position
    #[error("Message {message_id} has no suggested reply at index {index}")]
    ReplyNotFound { message_id: u64, index: usize },
    /// Execution requires at least one approved step
    #[error("Plan in message {id} has no approved steps")]
    NothingApproved { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A scheduled continuation panicked or was aborted
    #[error("Task error: {message}")]
    Task { message: String },
}

/// Builder for creating step transition errors.
pub struct TransitionErrorBuilder {
    step_id: u64,
    from: StepStatus,
}

impl TransitionErrorBuilder {
    /// Create a new transition error builder for a step in its current status.
    pub fn new(step_id: u64, from: StepStatus) -> Self {
        Self { step_id, from }
    }

    /// Build the error with the rejected target status.
    pub fn to(self, to: StepStatus) -> SessionError {
        SessionError::InvalidTransition {
            step_id: self.step_id,
            from: self.from,
            to,
        }
    }
}

impl SessionError {
    /// Creates a builder for step transition errors.
    pub fn transition(step_id: u64, from: StepStatus) -> TransitionErrorBuilder {
        TransitionErrorBuilder::new(step_id, from)
    }

    /// Returns true for rejections of a state-machine operation, as opposed to
    /// IO or configuration failures.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::MessageNotFound { .. }
                | Self::StepNotFound { .. }
                | Self::NotAPlan { .. }
                | Self::InvalidTransition { .. }
                | Self::PlanNotAwaiting { .. }
                | Self::PlanNotRunning { .. }
                | Self::NothingApproved { .. }
                | Self::ReplyNotFound { .. }
        )
    }
}

/// Specialized extension trait for file-system Results.
pub trait IoResultExt<T> {
    /// Map IO errors to [`SessionError::FileSystem`] at the given path.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| SessionError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
