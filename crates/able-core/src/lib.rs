//! Core library for the Able research assistant.
//!
//! This crate provides the plan-driven chat session: a user query becomes a
//! reviewable multi-step research plan, the user approves, edits or skips
//! steps, and a simulated execution pass runs the remaining steps one by one.
//!
//! # Layers
//!
//! - [`planning`]: pure, total query-to-plan generation and canned results
//! - [`transcript`]: the owned message list and every validated transition
//! - [`session`]: the async facade with timed continuations
//! - [`display`] / [`export`] / [`markup`]: rendering the read model
//!
//! # Quick Start
//!
//! ```rust
//! use able_core::{config::Pacing, models::StepStatus, SessionBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionBuilder::new()
//!     .with_pacing(Pacing::instant())
//!     .build()?;
//!
//! let plan_id = session
//!     .submit_query("Deep dive on monday.com")
//!     .await
//!     .expect("query is not blank")
//!     .wait()
//!     .await?
//!     .expect("plan appended");
//!
//! session.approve_all_pending(plan_id).await;
//! if let Some(execution) = session.execute_plan(plan_id).await {
//!     execution.wait().await?;
//! }
//!
//! let transcript = session.snapshot().await;
//! let plan = transcript.get(plan_id).and_then(|m| m.plan.as_ref()).unwrap();
//! assert!(plan.steps.iter().all(|s| s.status == StepStatus::Completed));
//! println!("{transcript}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod markup;
pub mod models;
pub mod planning;
pub mod session;
pub mod timer;
pub mod transcript;

// Re-export commonly used types
pub use config::{Pacing, SessionConfig};
pub use display::ActionOutcome;
pub use error::{Result, SessionError};
pub use export::ExportFormat;
pub use models::{ChatMessage, MessageRole, Plan, PlanStatus, PlanStep, StepStatus};
pub use session::{Continuation, Session, SessionBuilder};
pub use transcript::{ReplyAction, Transcript, STARTERS};
