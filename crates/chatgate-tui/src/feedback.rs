//! Collects submission feedback off the UI thread.
//!
//! The submitter runs inside a spawned task, so messages are gathered here and
//! shipped back to the reducer in one `UiEvent`.

use chatgate_core::AuthFeedback;

use crate::state::Notice;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackReport {
    pub notices: Vec<Notice>,
    pub navigate: Option<String>,
}

impl FeedbackReport {
    /// The notice to show: the most recent one.
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl AuthFeedback for FeedbackReport {
    fn on_success(&mut self, message: &str) {
        self.notices.push(Notice::success(message));
    }

    fn on_error(&mut self, message: &str) {
        self.notices.push(Notice::error(message));
    }

    fn navigate(&mut self, location: &str) {
        self.navigate = Some(location.to_string());
    }
}
