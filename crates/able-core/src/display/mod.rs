//! Display implementations and wrappers for transcript output.
//!
//! Domain models implement [`std::fmt::Display`] as markdown, so a front end
//! can print a message, a plan or a whole transcript directly, and a
//! terminal renderer can style the result.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │   Formatted     │
//! │ (ChatMessage,   │───▶│ wrapper types   │───▶│    Output       │
//! │  Plan, Step)    │    │                 │    │ (Terminal/File) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Display for the whole [`crate::Transcript`]
//! - [`status`]: Feedback lines for user actions ([`ActionOutcome`])
//! - [`datetime`]: Message time formatting ([`TimeOfDay`])
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use able_core::{planning::generate_plan, Transcript};
//!
//! let mut transcript = Transcript::new();
//! transcript.push_user("Deep dive on monday.com");
//! transcript.push_plan(generate_plan("Deep dive on monday.com"));
//!
//! let output = transcript.to_string();
//! assert!(output.contains("### monday.com Deep Dive Analysis (awaiting)"));
//! assert!(output.contains("#### 1. Company overview & financials (○ Pending)"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use datetime::TimeOfDay;
pub use status::ActionOutcome;
