//! Display implementations for domain models.
//!
//! All output is markdown: messages are `##` sections, plans `###` and steps
//! `####`, so a transcript nests cleanly when printed as a whole.

use std::fmt;

use super::datetime::TimeOfDay;
use crate::models::{ChatMessage, MessageRole, Plan, PlanStatus, PlanStep, StepStatus};

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "#### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        if self.status == StepStatus::Completed {
            if let Some(result) = &self.result {
                writeln!(f, "**Result:** {result}")?;
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.status)?;
        writeln!(f)?;
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let speaker = match self.role {
            MessageRole::User => "You",
            MessageRole::Assistant | MessageRole::Plan => "Able",
        };
        writeln!(
            f,
            "## [{}] {} · {}",
            self.id,
            speaker,
            TimeOfDay(&self.created_at)
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)?;

        if let Some(plan) = &self.plan {
            write!(f, "{plan}")?;
        }

        if !self.suggested_replies.is_empty() {
            for (index, reply) in self.suggested_replies.iter().enumerate() {
                writeln!(f, "- [{}] {reply}", index + 1)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
