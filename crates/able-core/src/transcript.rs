//! The session transcript and every state transition applied to it.
//!
//! [`Transcript`] is a plain owned value: each operation validates its
//! preconditions, mutates in place and reports rejections as
//! [`SessionError`]s without touching any other message or step. The async
//! [`crate::session::Session`] wraps it behind a mutex; tests can drive it
//! directly.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SessionError},
    models::{ChatMessage, Plan, PlanStatus, StepStatus},
    planning::{step_result, PlanTemplate},
};

/// Intro text of every plan message.
pub const PLAN_INTRO: &str = "I've created a plan for your request. Review the steps below and approve, edit, or skip any steps before I begin.";

/// Assistant text appended once a plan finishes.
pub const COMPLETION_TEXT: &str = "✅ **Plan completed successfully!**\n\nAll steps have been executed. Here's a summary of what was accomplished:\n\n• Analyzed market segments and key players\n• Compiled funding data and investment trends\n• Generated competitive landscape mapping\n• Created executive summary with insights\n\nWould you like me to export these findings or dive deeper into any specific area?";

/// Suggested replies attached to the completion message.
pub const COMPLETION_REPLIES: &[&str] = &["Export as PDF", "Generate heatmap", "Add to project"];

/// Reply that files the conversation into a project instead of re-populating
/// the input.
pub const SAVE_TO_PROJECT_REPLY: &str = "Add to project";

/// Empty-state quick actions; each pre-fills the input.
pub const STARTERS: &[&str] = &["Deep dive on ", "Market scan for ", "Competitor analysis for "];

/// What picking a suggested reply does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyAction {
    /// Put the reply text into the input box
    Prefill(String),
    /// Save the conversation to a project
    SaveToProject,
}

/// Ordered, append-only list of chat messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, message_id: u64) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    /// The conversation may be saved to a project once it holds an exchange.
    pub fn can_save_to_project(&self) -> bool {
        self.messages.len() >= 2
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn push(&mut self, build: impl FnOnce(u64) -> ChatMessage) -> u64 {
        let id = self.allocate_id();
        self.messages.push(build(id));
        id
    }

    /// Appends the user's text verbatim.
    pub fn push_user(&mut self, text: &str) -> u64 {
        self.push(|id| ChatMessage::user(id, text))
    }

    /// Appends a plan message built from `template`.
    pub fn push_plan(&mut self, template: PlanTemplate) -> u64 {
        self.push(|id| ChatMessage::plan(id, PLAN_INTRO, template.into_plan()))
    }

    /// Appends an assistant message.
    pub fn push_assistant(&mut self, text: &str, replies: &[&str]) -> u64 {
        let replies = replies.iter().map(|r| (*r).to_string()).collect();
        self.push(|id| ChatMessage::assistant(id, text, replies))
    }

    fn plan(&self, message_id: u64) -> Result<&Plan> {
        let message = self
            .get(message_id)
            .ok_or(SessionError::MessageNotFound { id: message_id })?;
        message
            .plan
            .as_ref()
            .ok_or(SessionError::NotAPlan { id: message_id })
    }

    fn plan_mut(&mut self, message_id: u64) -> Result<&mut Plan> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or(SessionError::MessageNotFound { id: message_id })?;
        message
            .plan
            .as_mut()
            .ok_or(SessionError::NotAPlan { id: message_id })
    }

    fn awaiting_plan_mut(&mut self, message_id: u64) -> Result<&mut Plan> {
        let plan = self.plan_mut(message_id)?;
        if plan.status != PlanStatus::Awaiting {
            return Err(SessionError::PlanNotAwaiting {
                id: message_id,
                status: plan.status,
            });
        }
        Ok(plan)
    }

    /// Moves one step of an awaiting plan out of `pending`.
    fn review_step(&mut self, message_id: u64, step_id: u64, to: StepStatus) -> Result<()> {
        let step = self
            .awaiting_plan_mut(message_id)?
            .step_mut(step_id)
            .ok_or(SessionError::StepNotFound {
                message_id,
                step_id,
            })?;
        if step.status != StepStatus::Pending {
            return Err(SessionError::transition(step_id, step.status).to(to));
        }
        step.status = to;
        Ok(())
    }

    /// `pending -> approved`, while the plan is awaiting.
    pub fn approve_step(&mut self, message_id: u64, step_id: u64) -> Result<()> {
        self.review_step(message_id, step_id, StepStatus::Approved)
    }

    /// `pending -> skipped`, while the plan is awaiting.
    pub fn skip_step(&mut self, message_id: u64, step_id: u64) -> Result<()> {
        self.review_step(message_id, step_id, StepStatus::Skipped)
    }

    /// Replaces a step description verbatim. Allowed in every status; the
    /// status, ID and title are left alone.
    pub fn edit_step_description(
        &mut self,
        message_id: u64,
        step_id: u64,
        description: &str,
    ) -> Result<()> {
        let step = self
            .plan_mut(message_id)?
            .step_mut(step_id)
            .ok_or(SessionError::StepNotFound {
                message_id,
                step_id,
            })?;
        step.description = description.to_string();
        Ok(())
    }

    /// Approves every pending step of an awaiting plan and returns how many
    /// changed. Approved and skipped steps are untouched.
    pub fn approve_all_pending(&mut self, message_id: u64) -> Result<usize> {
        let plan = self.awaiting_plan_mut(message_id)?;
        let mut approved = 0;
        for step in plan.steps.iter_mut().filter(|s| s.status == StepStatus::Pending) {
            step.status = StepStatus::Approved;
            approved += 1;
        }
        Ok(approved)
    }

    /// Whether [`Transcript::begin_execution`] would accept the plan.
    pub fn can_execute(&self, message_id: u64) -> bool {
        self.plan(message_id).is_ok_and(Plan::can_execute)
    }

    /// `awaiting -> running`. Returns the step IDs in creation order, which is
    /// the order they execute in.
    pub fn begin_execution(&mut self, message_id: u64) -> Result<Vec<u64>> {
        let plan = self.awaiting_plan_mut(message_id)?;
        if plan.count(StepStatus::Approved) == 0 {
            return Err(SessionError::NothingApproved { id: message_id });
        }
        plan.status = PlanStatus::Running;
        Ok(plan.steps.iter().map(|s| s.id).collect())
    }

    /// Marks a step `running`. Returns `Ok(false)` for steps that are already
    /// settled (skipped, or completed), which execution passes over. Pending
    /// steps run as well as approved ones.
    pub fn start_step(&mut self, message_id: u64, step_id: u64) -> Result<bool> {
        let plan = self.plan_mut(message_id)?;
        if plan.status != PlanStatus::Running {
            return Err(SessionError::PlanNotRunning {
                id: message_id,
                status: plan.status,
            });
        }
        let step = plan.step_mut(step_id).ok_or(SessionError::StepNotFound {
            message_id,
            step_id,
        })?;
        if step.status.is_terminal() {
            return Ok(false);
        }
        if !step.status.can_transition_to(StepStatus::Running) {
            return Err(SessionError::transition(step_id, step.status).to(StepStatus::Running));
        }
        step.status = StepStatus::Running;
        Ok(true)
    }

    /// `running -> completed`, filling in the canned result for the title.
    pub fn complete_step(&mut self, message_id: u64, step_id: u64) -> Result<()> {
        let step = self
            .plan_mut(message_id)?
            .step_mut(step_id)
            .ok_or(SessionError::StepNotFound {
                message_id,
                step_id,
            })?;
        if step.status != StepStatus::Running {
            return Err(SessionError::transition(step_id, step.status).to(StepStatus::Completed));
        }
        step.status = StepStatus::Completed;
        step.result = Some(step_result(&step.title).to_string());
        Ok(())
    }

    /// `running -> completed` for the plan, then appends the completion
    /// message. Returns the new message's ID.
    pub fn finish_execution(&mut self, message_id: u64) -> Result<u64> {
        let plan = self.plan_mut(message_id)?;
        if !plan.status.can_transition_to(PlanStatus::Completed) {
            return Err(SessionError::PlanNotRunning {
                id: message_id,
                status: plan.status,
            });
        }
        plan.status = PlanStatus::Completed;
        Ok(self.push_assistant(COMPLETION_TEXT, COMPLETION_REPLIES))
    }

    /// Resolves the suggested reply at `index` on a message.
    pub fn select_reply(&self, message_id: u64, index: usize) -> Result<ReplyAction> {
        let reply = self
            .get(message_id)
            .ok_or(SessionError::MessageNotFound { id: message_id })?
            .suggested_replies
            .get(index)
            .ok_or(SessionError::ReplyNotFound { message_id, index })?;
        if reply == SAVE_TO_PROJECT_REPLY {
            Ok(ReplyAction::SaveToProject)
        } else {
            Ok(ReplyAction::Prefill(reply.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::MessageRole, planning::generate_plan};

    fn transcript_with_plan(query: &str) -> (Transcript, u64) {
        let mut transcript = Transcript::new();
        transcript.push_user(query);
        let id = transcript.push_plan(generate_plan(query));
        (transcript, id)
    }

    fn statuses(transcript: &Transcript, id: u64) -> Vec<StepStatus> {
        transcript.get(id).unwrap().plan.as_ref().unwrap().steps.iter().map(|s| s.status).collect()
    }

    #[test]
    fn test_ids_are_monotonic() {
        let (mut transcript, plan_id) = transcript_with_plan("Scan AI in logistics");
        assert_eq!(plan_id, 2);
        assert_eq!(transcript.push_user("again"), 3);
        assert_eq!(transcript.messages()[0].id, 1);
    }

    #[test]
    fn test_plan_message_shape() {
        let (transcript, id) = transcript_with_plan("Scan AI in logistics");
        let message = transcript.get(id).unwrap();
        assert_eq!(message.role, MessageRole::Plan);
        assert_eq!(message.text, PLAN_INTRO);
        assert_eq!(message.plan.as_ref().unwrap().status, PlanStatus::Awaiting);
    }

    #[test]
    fn test_approve_and_skip() {
        let (mut transcript, id) = transcript_with_plan("Deep dive on monday.com");
        transcript.approve_step(id, 1).unwrap();
        transcript.skip_step(id, 3).unwrap();
        assert_eq!(
            statuses(&transcript, id),
            vec![StepStatus::Approved, StepStatus::Pending, StepStatus::Skipped, StepStatus::Pending]
        );
    }

    #[test]
    fn test_review_rejects_non_pending_step() {
        let (mut transcript, id) = transcript_with_plan("Deep dive on monday.com");
        transcript.skip_step(id, 2).unwrap();
        let err = transcript.approve_step(id, 2).unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidTransition {
                step_id: 2,
                from: StepStatus::Skipped,
                to: StepStatus::Approved
            }
        ));
        assert_eq!(statuses(&transcript, id)[1], StepStatus::Skipped);
    }

    #[test]
    fn test_unknown_targets() {
        let (mut transcript, id) = transcript_with_plan("Deep dive on monday.com");
        assert!(matches!(
            transcript.approve_step(99, 1),
            Err(SessionError::MessageNotFound { id: 99 })
        ));
        assert!(matches!(
            transcript.approve_step(id, 9),
            Err(SessionError::StepNotFound { step_id: 9, .. })
        ));
        assert!(matches!(
            transcript.approve_step(1, 1),
            Err(SessionError::NotAPlan { id: 1 })
        ));
    }

    #[test]
    fn test_approve_all_pending_leaves_reviewed_steps() {
        let (mut transcript, id) = transcript_with_plan("Deep dive on monday.com");
        transcript.approve_step(id, 2).unwrap();
        transcript.skip_step(id, 3).unwrap();
        assert_eq!(transcript.approve_all_pending(id).unwrap(), 2);
        assert_eq!(
            statuses(&transcript, id),
            vec![StepStatus::Approved, StepStatus::Approved, StepStatus::Skipped, StepStatus::Approved]
        );
    }

    #[test]
    fn test_begin_execution_requires_approval() {
        let (mut transcript, id) = transcript_with_plan("Deep dive on monday.com");
        assert!(!transcript.can_execute(id));
        assert!(matches!(
            transcript.begin_execution(id),
            Err(SessionError::NothingApproved { .. })
        ));

        transcript.approve_step(id, 4).unwrap();
        assert!(transcript.can_execute(id));
        assert_eq!(transcript.begin_execution(id).unwrap(), vec![1, 2, 3, 4]);
        assert!(!transcript.can_execute(id));
        assert!(matches!(
            transcript.begin_execution(id),
            Err(SessionError::PlanNotAwaiting {
                status: PlanStatus::Running,
                ..
            })
        ));
    }

    #[test]
    fn test_review_is_closed_once_running() {
        let (mut transcript, id) = transcript_with_plan("Deep dive on monday.com");
        transcript.approve_step(id, 1).unwrap();
        transcript.begin_execution(id).unwrap();
        assert!(transcript.skip_step(id, 2).is_err());
        assert!(transcript.approve_all_pending(id).is_err());
        assert_eq!(statuses(&transcript, id)[1], StepStatus::Pending);
    }

    #[test]
    fn test_step_execution_transitions() {
        let (mut transcript, id) = transcript_with_plan("Scan AI in logistics");
        transcript.approve_step(id, 1).unwrap();
        transcript.skip_step(id, 2).unwrap();
        transcript.begin_execution(id).unwrap();

        assert!(!transcript.start_step(id, 2).unwrap());
        assert!(transcript.start_step(id, 1).unwrap());
        // Unapproved steps still run.
        assert!(transcript.start_step(id, 3).unwrap());

        transcript.complete_step(id, 1).unwrap();
        let step = &transcript.get(id).unwrap().plan.as_ref().unwrap().steps[0];
        assert_eq!(step.status, StepStatus::Completed);
        assert!(step.result.as_deref().unwrap().starts_with("Identified 4 key segments"));

        assert!(transcript.complete_step(id, 1).is_err());
        assert!(transcript.complete_step(id, 4).is_err());
        // Settled steps are passed over rather than restarted.
        assert!(!transcript.start_step(id, 1).unwrap());
        assert_eq!(statuses(&transcript, id)[0], StepStatus::Completed);
    }

    #[test]
    fn test_start_step_requires_running_plan() {
        let (mut transcript, id) = transcript_with_plan("Scan AI in logistics");
        assert!(matches!(
            transcript.start_step(id, 1),
            Err(SessionError::PlanNotRunning {
                status: PlanStatus::Awaiting,
                ..
            })
        ));
        assert_eq!(statuses(&transcript, id)[0], StepStatus::Pending);
    }

    #[test]
    fn test_finish_execution_appends_completion() {
        let (mut transcript, id) = transcript_with_plan("Scan AI in logistics");
        transcript.approve_all_pending(id).unwrap();
        transcript.begin_execution(id).unwrap();
        let done = transcript.finish_execution(id).unwrap();

        assert_eq!(transcript.get(id).unwrap().plan.as_ref().unwrap().status, PlanStatus::Completed);
        let message = transcript.get(done).unwrap();
        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.suggested_replies.len(), 3);
        assert!(transcript.finish_execution(id).is_err());
    }

    #[test]
    fn test_edit_description_in_any_status() {
        let (mut transcript, id) = transcript_with_plan("Deep dive on monday.com");
        transcript.skip_step(id, 1).unwrap();
        transcript.edit_step_description(id, 1, "Only public filings").unwrap();

        let steps = &transcript.get(id).unwrap().plan.as_ref().unwrap().steps;
        assert_eq!(steps[0].description, "Only public filings");
        assert_eq!(steps[0].status, StepStatus::Skipped);
        assert_eq!(steps[0].title, "Company overview & financials");
        assert!(steps[1].description.starts_with("Review product roadmap"));
    }

    #[test]
    fn test_select_reply() {
        let mut transcript = Transcript::new();
        let id = transcript.push_assistant(COMPLETION_TEXT, COMPLETION_REPLIES);
        assert_eq!(
            transcript.select_reply(id, 0).unwrap(),
            ReplyAction::Prefill("Export as PDF".to_string())
        );
        assert_eq!(transcript.select_reply(id, 2).unwrap(), ReplyAction::SaveToProject);
        assert!(matches!(
            transcript.select_reply(id, 3),
            Err(SessionError::ReplyNotFound { index: 3, .. })
        ));
    }

    #[test]
    fn test_can_save_to_project() {
        let mut transcript = Transcript::new();
        assert!(!transcript.can_save_to_project());
        transcript.push_user("hello");
        assert!(!transcript.can_save_to_project());
        transcript.push_plan(generate_plan("hello"));
        assert!(transcript.can_save_to_project());
    }
}
