//! Bodies of the timed continuations.

use std::sync::Arc;

use log::{debug, info, trace, warn};

use super::Shared;
use crate::planning::generate_plan;

/// Waits out the thinking delay, then appends the plan for `query`.
///
/// The composing count drops in the same critical section that appends the
/// plan message, so readers never see a plan while still composing for it.
pub(super) async fn compose(shared: Arc<Shared>, query: String) -> Option<u64> {
    let slept = shared.timer.sleep(shared.pacing.thinking()).await;

    let mut state = shared.state.lock().await;
    state.composing = state.composing.saturating_sub(1);
    if slept.is_err() {
        debug!("Plan generation cancelled");
        return None;
    }

    let template = generate_plan(&query);
    info!(
        "Generated plan '{}' with {} steps",
        template.title,
        template.steps.len()
    );
    Some(state.transcript.push_plan(template))
}

/// Runs every non-skipped step in order, then completes the plan and appends
/// the completion message. Returns that message's ID, or `None` when the
/// session shut down mid-run.
pub(super) async fn run(shared: Arc<Shared>, message_id: u64, step_ids: Vec<u64>) -> Option<u64> {
    for step_id in step_ids {
        let started = shared
            .apply("start step", |t| t.start_step(message_id, step_id))
            .await;
        match started {
            Some(true) => {}
            Some(false) => {
                trace!("Step {step_id} of message {message_id} is skipped");
                continue;
            }
            None => {
                warn!("Step {step_id} of message {message_id} could not be started");
                continue;
            }
        }

        let delay = shared.pacing.step_delay(&mut rand::rng());
        trace!("Running step {step_id} of message {message_id} for {delay:?}");
        if shared.timer.sleep(delay).await.is_err() {
            debug!("Execution of message {message_id} cancelled at step {step_id}");
            return None;
        }

        shared
            .apply("complete step", |t| t.complete_step(message_id, step_id))
            .await;
    }

    let completion = shared
        .apply("finish plan", |t| t.finish_execution(message_id))
        .await;
    if let Some(id) = completion {
        info!("Plan in message {message_id} completed, summary in message {id}");
    }
    completion
}
