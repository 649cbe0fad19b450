//! Feedback lines for user actions.

use std::fmt;

/// Outcome of one user action, such as approving a step.
///
/// Ignored actions are not errors: the session leaves its state unchanged
/// and the front end just says so.
pub struct ActionOutcome {
    pub message: String,
    pub applied: bool,
}

impl ActionOutcome {
    pub fn applied(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: true,
        }
    }

    pub fn ignored(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: false,
        }
    }

    /// Picks the applied or ignored variant from a boolean result.
    pub fn from_bool(applied: bool, done: impl Into<String>, skipped: impl Into<String>) -> Self {
        if applied {
            Self::applied(done)
        } else {
            Self::ignored(skipped)
        }
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.applied { "Done:" } else { "Ignored:" },
            self.message
        )
    }
}
