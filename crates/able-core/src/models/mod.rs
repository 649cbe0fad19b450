//! Data models for the chat transcript.
//!
//! A session owns an append-only list of [`ChatMessage`]s. Messages with the
//! [`MessageRole::Plan`] role embed a [`Plan`], which owns a fixed list of
//! [`PlanStep`]s created together with it. Display implementations live in
//! [`crate::display::models`].
//!
//! # Lifecycles
//!
//! - [`PlanStatus`]: `awaiting -> running -> completed`, strictly forward.
//! - [`StepStatus`]: `pending -> {approved, skipped}`, `{pending, approved} ->
//!   running`, `running -> completed`. `skipped` and `completed` are terminal.
//!
//! # Examples
//!
//! ```rust
//! use able_core::models::{ChatMessage, Plan, PlanStep, StepStatus};
//!
//! let plan = Plan::new(
//!     "Research Plan",
//!     vec![PlanStep::pending(1, "Define research scope", "Clarify objectives.")],
//! );
//! let message = ChatMessage::plan(2, "Review the steps below.", plan);
//!
//! let plan = message.plan.as_ref().unwrap();
//! assert_eq!(plan.steps[0].status, StepStatus::Pending);
//! assert!(!plan.can_execute());
//! ```

pub mod message;
pub mod plan;
pub mod status;
pub mod step;


pub use message::ChatMessage;
pub use plan::Plan;
pub use status::{MessageRole, PlanStatus, StepStatus};
pub use step::PlanStep;
