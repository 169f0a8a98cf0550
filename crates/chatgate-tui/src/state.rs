//! Application state.
//!
//! ```text
//! AppState
//! ├── tabs: TabController<TabPane, FormPane>  (which form is shown, field values)
//! ├── notice: Option<Notice>                  (last message from a submission)
//! ├── task_seq: TaskSeq                       (submission id generator)
//! └── exit: TuiExit                           (why the loop stopped)
//! ```

use chatgate_core::{FormKind, TabController};

use crate::form::{FormPane, TabPane};
use crate::task::TaskSeq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// How the TUI session ended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TuiExit {
    /// User left without logging in.
    #[default]
    Quit,
    /// Login accepted; continue at this location.
    Navigate(String),
}

pub struct AppState {
    pub tabs: TabController<TabPane, FormPane>,
    pub notice: Option<Notice>,
    pub task_seq: TaskSeq,
    pub should_quit: bool,
    pub exit: TuiExit,
    /// Server shown in the header.
    pub server: String,
}

impl AppState {
    /// Builds both panes and selects the login tab.
    pub fn new(server: impl Into<String>) -> Self {
        let tabs = FormKind::ALL.into_iter().map(TabPane::new).collect();
        let forms = FormKind::ALL.into_iter().map(FormPane::new).collect();
        let mut tabs = TabController::new(tabs, forms);
        if let Err(e) = tabs.show_tab(FormKind::Login.tab_name()) {
            tracing::warn!(error = %e, "initial tab selection failed");
        }

        Self {
            tabs,
            notice: None,
            task_seq: TaskSeq::default(),
            should_quit: false,
            exit: TuiExit::Quit,
            server: server.into(),
        }
    }

    pub fn active_kind(&self) -> FormKind {
        self.tabs
            .active_form()
            .map_or(FormKind::Login, |form| form.kind)
    }

    pub fn form(&self, kind: FormKind) -> Option<&FormPane> {
        self.tabs.forms().iter().find(|form| form.kind == kind)
    }

    pub fn form_mut(&mut self, kind: FormKind) -> Option<&mut FormPane> {
        self.tabs.form_mut(kind.form_id())
    }
}
