//! Chat message model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{MessageRole, Plan};

/// A single entry in the session transcript.
///
/// Role, ID and text never change after creation. Only the embedded plan
/// (its status and steps) is updated in place, and only on plan messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Session-unique, monotonically increasing identifier
    pub id: u64,

    /// Who produced the message
    pub role: MessageRole,

    /// Display text; assistant text may use `**bold**` and line breaks
    pub text: String,

    /// Short replies the user may pick to re-populate the input
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_replies: Vec<String>,

    /// Present only on plan messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,

    /// Timestamp when the message was appended (UTC)
    pub created_at: Timestamp,
}

impl ChatMessage {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self::new(id, MessageRole::User, text.into(), Vec::new(), None)
    }

    pub fn assistant(id: u64, text: impl Into<String>, suggested_replies: Vec<String>) -> Self {
        Self::new(id, MessageRole::Assistant, text.into(), suggested_replies, None)
    }

    pub fn plan(id: u64, text: impl Into<String>, plan: Plan) -> Self {
        Self::new(id, MessageRole::Plan, text.into(), Vec::new(), Some(plan))
    }

    fn new(
        id: u64,
        role: MessageRole,
        text: String,
        suggested_replies: Vec<String>,
        plan: Option<Plan>,
    ) -> Self {
        Self {
            id,
            role,
            text,
            suggested_replies,
            plan,
            created_at: Timestamp::now(),
        }
    }
}
