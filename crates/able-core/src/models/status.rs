//! Status enumerations for messages, plans and steps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Author of a chat message. Fixed at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Text typed by the user
    User,

    /// Synthesized assistant reply
    Assistant,

    /// Assistant reply carrying a reviewable plan
    Plan,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::Plan => "plan",
        }
    }
}

/// Lifecycle of a plan message: `awaiting -> running -> completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan is under review; steps may be approved, skipped or edited
    #[default]
    Awaiting,

    /// Plan execution has started
    Running,

    /// Every non-skipped step has completed
    Completed,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "awaiting" => Ok(PlanStatus::Awaiting),
            "running" => Ok(PlanStatus::Running),
            "completed" => Ok(PlanStatus::Completed),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Awaiting => "awaiting",
            PlanStatus::Running => "running",
            PlanStatus::Completed => "completed",
        }
    }

    /// Whether the plan may move to `next`. Plans only move forward, one
    /// stage at a time.
    pub fn can_transition_to(self, next: PlanStatus) -> bool {
        matches!(
            (self, next),
            (PlanStatus::Awaiting, PlanStatus::Running) | (PlanStatus::Running, PlanStatus::Completed)
        )
    }
}

/// Type-safe enumeration of step statuses.
///
/// ```text
/// pending ──approve──▶ approved ──execute──▶ running ──▶ completed
///    │  └───────────────execute──────────────▲
///    └──skip──▶ skipped
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step is waiting for review
    #[default]
    Pending,

    /// Step was approved by the user
    Approved,

    /// Step is being executed
    Running,

    /// Step finished and carries a result
    Completed,

    /// Step was excluded from execution
    Skipped,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(StepStatus::Pending),
            "approved" => Ok(StepStatus::Approved),
            "running" => Ok(StepStatus::Running),
            "completed" => Ok(StepStatus::Completed),
            "skipped" => Ok(StepStatus::Skipped),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Approved => "approved",
            StepStatus::Running => "running",
            StepStatus::Completed => "completed",
            StepStatus::Skipped => "skipped",
        }
    }

    /// Whether a step in this status may move to `next`.
    ///
    /// Unapproved steps are allowed to run: only an explicit skip keeps a
    /// step out of execution.
    pub fn can_transition_to(self, next: StepStatus) -> bool {
        use StepStatus::*;
        matches!(
            (self, next),
            (Pending, Approved) | (Pending, Skipped) | (Pending, Running) | (Approved, Running) | (Running, Completed)
        )
    }

    /// `skipped` and `completed` never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, StepStatus::Skipped | StepStatus::Completed)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use able_core::models::StepStatus;
    ///
    /// assert_eq!(StepStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(StepStatus::Running.with_icon(), "➤ Running");
    /// assert_eq!(StepStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Pending => "○ Pending",
            StepStatus::Approved => "● Approved",
            StepStatus::Running => "➤ Running",
            StepStatus::Completed => "✓ Completed",
            StepStatus::Skipped => "✗ Skipped",
        }
    }
}
