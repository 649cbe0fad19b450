//! Plan step model definition.

use serde::{Deserialize, Serialize};

use super::StepStatus;

/// One unit of plan work with its own lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanStep {
    /// Identifier unique within the parent plan (1-based)
    pub id: u64,

    /// Short label, never edited
    pub title: String,

    /// Longer text; the user may rewrite it
    pub description: String,

    /// Current status of the step
    #[serde(default)]
    pub status: StepStatus,

    /// Outcome text, set when the step completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl PlanStep {
    /// Creates a step in the `pending` state.
    pub fn pending(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status: StepStatus::Pending,
            result: None,
        }
    }
}
