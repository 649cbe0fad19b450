//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{PlanStatus, PlanStep, StepStatus};

/// A titled, ordered, fixed-size set of steps attached to a plan message.
///
/// Steps are created together with the plan and are never added or removed
/// afterwards; only their fields change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Title shown above the steps
    pub title: String,

    /// Status of the plan as a whole
    #[serde(default)]
    pub status: PlanStatus,

    /// Steps in creation order
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Creates an awaiting plan from its steps.
    pub fn new(title: impl Into<String>, steps: Vec<PlanStep>) -> Self {
        Self {
            title: title.into(),
            status: PlanStatus::Awaiting,
            steps,
        }
    }

    pub fn step(&self, step_id: u64) -> Option<&PlanStep> {
        self.steps.iter().find(|step| step.id == step_id)
    }

    pub fn step_mut(&mut self, step_id: u64) -> Option<&mut PlanStep> {
        self.steps.iter_mut().find(|step| step.id == step_id)
    }

    /// Number of steps currently in `status`.
    pub fn count(&self, status: StepStatus) -> usize {
        self.steps.iter().filter(|step| step.status == status).count()
    }

    /// True while the plan is under review and at least one step is approved.
    pub fn can_execute(&self) -> bool {
        self.status == PlanStatus::Awaiting && self.count(StepStatus::Approved) > 0
    }
}
