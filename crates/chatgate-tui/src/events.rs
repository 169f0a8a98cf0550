//! UI event types.
//!
//! All external inputs (terminal, timer, async results) are converted to
//! `UiEvent` before being processed by the reducer. Submission results arrive
//! through the runtime's inbox.

use chatgate_core::FormKind;
use crossterm::event::Event as CrosstermEvent;

use crate::feedback::FeedbackReport;
use crate::task::TaskId;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic wake-up; triggers a redraw.
    Tick,

    /// Raw terminal input.
    Terminal(CrosstermEvent),

    /// A spawned submission completed.
    SubmitFinished {
        kind: FormKind,
        task: TaskId,
        success: bool,
        report: FeedbackReport,
    },
}
