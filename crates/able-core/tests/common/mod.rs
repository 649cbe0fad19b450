use able_core::{Pacing, Session, SessionBuilder, StepStatus};

/// Helper function to create a session with the reference latencies.
pub fn create_test_session() -> Session {
    SessionBuilder::new()
        .with_pacing(Pacing::default())
        .build()
        .expect("Failed to create session")
}

/// Submits `query` and waits for its plan message.
pub async fn submit_and_wait(session: &Session, query: &str) -> u64 {
    session
        .submit_query(query)
        .await
        .expect("query accepted")
        .wait()
        .await
        .expect("compose task")
        .expect("plan appended")
}

/// Current step statuses of the plan in `message_id`.
pub async fn statuses(session: &Session, message_id: u64) -> Vec<StepStatus> {
    session
        .snapshot()
        .await
        .get(message_id)
        .and_then(|m| m.plan.as_ref())
        .map(|plan| plan.steps.iter().map(|s| s.status).collect())
        .expect("plan message")
}
