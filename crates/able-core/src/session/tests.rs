//! Tests for the session module.

use std::time::Duration;

use tokio::time::{advance, Instant};

use super::*;
use crate::models::{MessageRole, PlanStatus, StepStatus};

fn create_test_session() -> Session {
    SessionBuilder::new()
        .with_pacing(Pacing::default())
        .build()
        .expect("Failed to create session")
}

async fn plan_for(session: &Session, query: &str) -> u64 {
    session
        .submit_query(query)
        .await
        .expect("query accepted")
        .wait()
        .await
        .expect("compose task")
        .expect("plan appended")
}

async fn step_statuses(session: &Session, message_id: u64) -> Vec<StepStatus> {
    let transcript = session.snapshot().await;
    transcript
        .get(message_id)
        .and_then(|m| m.plan.as_ref())
        .map(|plan| plan.steps.iter().map(|s| s.status).collect())
        .unwrap_or_default()
}

#[tokio::test(start_paused = true)]
async fn test_submit_appends_user_then_plan_after_thinking() {
    let session = create_test_session();
    let start = Instant::now();

    let composing = session.submit_query("Scan AI in logistics").await.unwrap();
    {
        let transcript = session.snapshot().await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role, MessageRole::User);
    }
    assert!(session.is_composing().await);

    let plan_id = composing.wait().await.unwrap().unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert!(!session.is_composing().await);

    let transcript = session.snapshot().await;
    assert_eq!(transcript.len(), 2);
    let message = transcript.get(plan_id).unwrap();
    assert_eq!(message.role, MessageRole::Plan);
    assert_eq!(message.plan.as_ref().unwrap().title, "AI in Logistics Market Scan");
}

#[tokio::test(start_paused = true)]
async fn test_blank_queries_are_ignored() {
    let session = create_test_session();
    assert!(session.submit_query("").await.is_none());
    assert!(session.submit_query("   \t\n").await.is_none());
    assert!(session.snapshot().await.is_empty());
    assert!(!session.is_composing().await);
}

#[tokio::test(start_paused = true)]
async fn test_composing_clears_with_last_plan() {
    let session = create_test_session();
    let first = session.submit_query("first").await.unwrap();
    // Let the first continuation register its delay before moving the clock.
    tokio::task::yield_now().await;
    advance(Duration::from_millis(500)).await;
    let second = session.submit_query("second").await.unwrap();

    first.wait().await.unwrap();
    assert!(session.is_composing().await);
    second.wait().await.unwrap();
    assert!(!session.is_composing().await);

    let roles: Vec<MessageRole> = session
        .snapshot()
        .await
        .messages()
        .iter()
        .map(|m| m.role)
        .collect();
    assert_eq!(
        roles,
        vec![MessageRole::User, MessageRole::User, MessageRole::Plan, MessageRole::Plan]
    );
}

#[tokio::test(start_paused = true)]
async fn test_review_operations_report_rejections() {
    let session = create_test_session();
    let plan_id = plan_for(&session, "Deep dive on monday.com").await;

    assert!(session.approve_step(plan_id, 1).await);
    assert!(!session.approve_step(plan_id, 1).await);
    assert!(session.skip_step(plan_id, 2).await);
    assert!(!session.skip_step(plan_id, 2).await);
    assert!(!session.approve_step(999, 1).await);
    assert!(!session.skip_step(plan_id, 42).await);
    assert_eq!(session.approve_all_pending(plan_id).await, 2);
    assert_eq!(session.approve_all_pending(plan_id).await, 0);

    assert_eq!(
        step_statuses(&session, plan_id).await,
        vec![StepStatus::Approved, StepStatus::Skipped, StepStatus::Approved, StepStatus::Approved]
    );
}

#[tokio::test(start_paused = true)]
async fn test_execute_requires_an_approved_step() {
    let session = create_test_session();
    let plan_id = plan_for(&session, "Deep dive on monday.com").await;

    assert!(!session.can_execute(plan_id).await);
    assert!(session.execute_plan(plan_id).await.is_none());
    assert_eq!(
        session.snapshot().await.get(plan_id).unwrap().plan.as_ref().unwrap().status,
        PlanStatus::Awaiting
    );
}

#[tokio::test(start_paused = true)]
async fn test_execution_runs_steps_one_at_a_time() {
    let session = create_test_session();
    let plan_id = plan_for(&session, "Deep dive on monday.com").await;
    session.approve_step(plan_id, 1).await;

    let execution = session.execute_plan(plan_id).await.unwrap();
    assert!(session.execute_plan(plan_id).await.is_none());

    // Let the first step start, then inspect while it sleeps.
    tokio::task::yield_now().await;
    advance(Duration::from_millis(10)).await;
    let statuses = step_statuses(&session, plan_id).await;
    assert_eq!(statuses[0], StepStatus::Running);
    assert_eq!(
        statuses.iter().filter(|s| **s == StepStatus::Running).count(),
        1
    );

    let completion = execution.wait().await.unwrap().unwrap();
    assert_eq!(
        step_statuses(&session, plan_id).await,
        vec![StepStatus::Completed; 4]
    );
    let transcript = session.snapshot().await;
    assert_eq!(transcript.get(completion).unwrap().role, MessageRole::Assistant);
}

#[tokio::test(start_paused = true)]
async fn test_edit_during_execution_is_not_lost() {
    let session = create_test_session();
    let plan_id = plan_for(&session, "Deep dive on monday.com").await;
    session.approve_all_pending(plan_id).await;

    let execution = session.execute_plan(plan_id).await.unwrap();
    tokio::task::yield_now().await;
    advance(Duration::from_millis(10)).await;

    assert!(
        session
            .edit_step_description(plan_id, 3, "Only Asana and ClickUp")
            .await
    );
    // Review is closed while running.
    assert!(!session.skip_step(plan_id, 4).await);

    execution.wait().await.unwrap();
    let transcript = session.snapshot().await;
    let step = &transcript.get(plan_id).unwrap().plan.as_ref().unwrap().steps[2];
    assert_eq!(step.description, "Only Asana and ClickUp");
    assert_eq!(step.status, StepStatus::Completed);
}

#[tokio::test(start_paused = true)]
async fn test_step_timing_stays_within_jitter() {
    let session = create_test_session();
    let plan_id = plan_for(&session, "Deep dive on monday.com").await;
    session.approve_step(plan_id, 1).await;
    for step_id in 2..=4 {
        session.skip_step(plan_id, step_id).await;
    }

    let start = Instant::now();
    session.execute_plan(plan_id).await.unwrap().wait().await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(1500));
    // Timer deadlines round up to the next millisecond tick.
    assert!(elapsed < Duration::from_millis(2510));
}

#[tokio::test(start_paused = true)]
async fn test_initial_query_is_taken_once() {
    let session = create_test_session();
    let start = Instant::now();

    let first = session.submit_initial_query("Scan AI in logistics").await.unwrap();
    assert!(session.submit_initial_query("again").await.is_none());

    let plan_id = first.wait().await.unwrap().unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1300));
    assert_eq!(session.snapshot().await.len(), 2);
    assert_eq!(plan_id, 2);
}

#[tokio::test(start_paused = true)]
async fn test_blank_initial_query_does_not_consume_handoff() {
    let session = create_test_session();
    assert!(session.submit_initial_query("  ").await.is_none());
    assert!(session.submit_initial_query("Deep dive on monday.com").await.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_pending_continuations() {
    let session = create_test_session();
    let composing = session.submit_query("Deep dive on monday.com").await.unwrap();
    session.shutdown();

    assert_eq!(composing.wait().await.unwrap(), None);
    assert!(!session.is_composing().await);
    assert_eq!(session.snapshot().await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_mid_execution_leaves_plan_running() {
    let session = create_test_session();
    let plan_id = plan_for(&session, "Deep dive on monday.com").await;
    session.approve_all_pending(plan_id).await;

    let execution = session.execute_plan(plan_id).await.unwrap();
    tokio::task::yield_now().await;
    session.shutdown();

    assert_eq!(execution.wait().await.unwrap(), None);
    let transcript = session.snapshot().await;
    assert_eq!(transcript.len(), 2);
    assert_eq!(
        transcript.get(plan_id).unwrap().plan.as_ref().unwrap().status,
        PlanStatus::Running
    );
}

#[tokio::test(start_paused = true)]
async fn test_select_reply_after_completion() {
    let session = create_test_session();
    let plan_id = plan_for(&session, "Scan AI in logistics").await;
    session.approve_all_pending(plan_id).await;
    let completion = session
        .execute_plan(plan_id)
        .await
        .unwrap()
        .wait()
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        session.select_reply(completion, 1).await,
        Some(ReplyAction::Prefill("Generate heatmap".to_string()))
    );
    assert_eq!(
        session.select_reply(completion, 2).await,
        Some(ReplyAction::SaveToProject)
    );
    assert_eq!(session.select_reply(plan_id, 0).await, None);
    assert!(session.can_save_to_project().await);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_refuses_new_work() {
    let session = create_test_session();
    let plan_id = plan_for(&session, "Deep dive on monday.com").await;
    session.approve_all_pending(plan_id).await;
    session.shutdown();
    assert!(session.is_shut_down());
    let before = session.snapshot().await;

    assert!(session.submit_query("Scan AI in logistics").await.is_none());
    assert!(session.submit_initial_query("Scan AI in logistics").await.is_none());
    assert!(session.execute_plan(plan_id).await.is_none());
    assert!(!session.is_composing().await);

    let after = session.snapshot().await;
    assert_eq!(after, before);
    let plan = after.get(plan_id).unwrap().plan.as_ref().unwrap();
    assert_eq!(plan.status, PlanStatus::Awaiting);
    assert!(plan.steps.iter().all(|s| s.status == StepStatus::Approved));

    // Review still works on the awaiting plan.
    assert!(session.edit_step_description(plan_id, 1, "Revenue only").await);
}
