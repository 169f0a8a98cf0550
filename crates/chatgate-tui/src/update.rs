//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use chatgate_core::{FormKind, SubmitPhase};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::{SubmitPayload, UiEffect};
use crate::events::UiEvent;
use crate::feedback::FeedbackReport;
use crate::form::Focus;
use crate::state::{AppState, Notice, TuiExit};
use crate::task::TaskId;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SubmitFinished {
            kind,
            task,
            success,
            report,
        } => handle_submit_finished(app, kind, task, success, &report),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            handle_key(app, key)
        }
        Event::Paste(text) => {
            if let Some(field) = app
                .tabs
                .active_form_mut()
                .and_then(|form| form.focused_field_mut())
            {
                field.insert_str(&text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => return vec![UiEffect::Quit],
        KeyCode::Char('l') if ctrl => show_tab(app, FormKind::Login),
        KeyCode::Char('r') if ctrl => show_tab(app, FormKind::Register),
        KeyCode::PageDown => cycle_tab(app, true),
        KeyCode::Right if ctrl => cycle_tab(app, true),
        KeyCode::PageUp => cycle_tab(app, false),
        KeyCode::Left if ctrl => cycle_tab(app, false),
        KeyCode::Enter => return submit(app),
        _ => edit_active_form(app, key, ctrl),
    }
    vec![]
}

/// Selects a tab by name, as clicking its header would.
fn show_tab(app: &mut AppState, kind: FormKind) {
    if let Err(e) = app.tabs.show_tab(kind.tab_name()) {
        app.notice = Some(Notice::error(e.to_string()));
    }
}

fn cycle_tab(app: &mut AppState, forward: bool) {
    let result = if forward {
        app.tabs.next_tab()
    } else {
        app.tabs.prev_tab()
    };
    if let Err(e) = result {
        app.notice = Some(Notice::error(e.to_string()));
    }
}

fn edit_active_form(app: &mut AppState, key: KeyEvent, ctrl: bool) {
    let Some(form) = app.tabs.active_form_mut() else {
        return;
    };

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            return;
        }
        _ => {}
    }

    let Some(field) = form.focused_field_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char(c) if !ctrl => field.insert_char(c),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}

/// Handles the "button click" on the active form.
///
/// Runs the client-side checks inline; only a valid form produces a
/// `Submit` effect. A form that is already submitting ignores the press.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    let Some(form) = app.tabs.active_form_mut() else {
        return vec![];
    };
    if form.phase.is_busy() {
        return vec![];
    }

    form.phase = SubmitPhase::Validating;
    let payload = match form.kind {
        FormKind::Login => SubmitPayload::Login(form.login_fields()),
        FormKind::Register => SubmitPayload::Register(form.register_fields()),
    };
    if let Err(err) = payload.validate() {
        form.phase = SubmitPhase::Idle;
        app.notice = Some(Notice::error(err.to_string()));
        return vec![];
    }

    let task = app.task_seq.next_id();
    form.phase = SubmitPhase::Submitting;
    form.task = Some(task);
    form.focus = Focus::Button;
    tracing::debug!(button = form.kind.button_id(), ?task, "submitting");
    vec![UiEffect::Submit { task, payload }]
}

fn handle_submit_finished(
    app: &mut AppState,
    kind: FormKind,
    task: TaskId,
    success: bool,
    report: &FeedbackReport,
) -> Vec<UiEffect> {
    let Some(form) = app.form_mut(kind) else {
        return vec![];
    };
    if form.task != Some(task) {
        tracing::debug!(?task, "ignoring stale submission result");
        return vec![];
    }
    form.task = None;
    form.phase = SubmitPhase::Idle;
    if success && kind == FormKind::Register {
        form.clear_secrets();
    }

    if let Some(notice) = report.latest() {
        app.notice = Some(notice.clone());
    }

    match &report.navigate {
        Some(location) => {
            app.exit = TuiExit::Navigate(location.clone());
            vec![UiEffect::Quit]
        }
        None => vec![],
    }
}
