//! Effect handlers for the TUI runtime.
//!
//! Handlers are async functions that return a `UiEvent`. The runtime spawns
//! them and forwards the result to its inbox; they never touch state.

use chatgate_core::AuthSubmitter;

use crate::effects::SubmitPayload;
use crate::events::UiEvent;
use crate::feedback::FeedbackReport;
use crate::task::TaskId;

/// Runs one submission through the core submitter.
pub async fn submit(submitter: AuthSubmitter, task: TaskId, payload: SubmitPayload) -> UiEvent {
    let kind = payload.kind();
    let mut report = FeedbackReport::default();
    let submission = match &payload {
        SubmitPayload::Login(fields) => submitter.submit_login(fields, &mut report).await,
        SubmitPayload::Register(fields) => submitter.submit_register(fields, &mut report).await,
    };
    UiEvent::SubmitFinished {
        kind,
        task,
        success: submission.is_success(),
        report,
    }
}
