//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never mutate
//! state or return effects.

use chatgate_core::{Activatable, SubmitPhase};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::form::{Field, Focus, FormPane};
use crate::state::{AppState, NoticeKind};

/// Height of one bordered input.
const FIELD_HEIGHT: u16 = 3;

/// Max width of the form column.
const FORM_WIDTH: u16 = 60;

const KEY_HINTS: &str =
    "Tab/↑↓ move · Enter submit · PgUp/PgDn or Ctrl+L/Ctrl+R switch tab · Esc quit";

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = centered_column(frame.area(), FORM_WIDTH);
    let [header, tabs_area, body, notice, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header);
    render_tabs(app, frame, tabs_area);
    if let Some(form) = app.tabs.active_form() {
        render_form(form, frame, body);
    }
    render_notice(app, frame, notice);
    frame.render_widget(
        Paragraph::new(Line::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        footer,
    );
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "chatgate",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", app.server),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_tabs(app: &AppState, frame: &mut Frame, area: Rect) {
    let selected = app
        .tabs
        .tabs()
        .iter()
        .position(Activatable::is_active)
        .unwrap_or(0);
    let labels = app
        .tabs
        .tabs()
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.kind.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(labels)
        .select(selected)
        .divider(Span::styled("|", Style::default().fg(Color::DarkGray)))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(tabs, area);
}

fn render_form(form: &FormPane, frame: &mut Frame, area: Rect) {
    // Validating starts and ends inside one reducer call, so it never reaches a frame.
    let title = if form.phase == SubmitPhase::Submitting {
        format!(" {} · submitting… ", form.kind.label())
    } else {
        format!(" {} ", form.kind.label())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title_top(Line::from(title).left_aligned())
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(inner);

    for (idx, field) in form.fields.iter().enumerate() {
        let focused = form.focus == Focus::Field(idx);
        render_field(field, focused, frame, rows[idx]);
    }
    render_button(form, frame, rows[form.fields.len()]);
}

fn render_field(field: &Field, focused: bool, frame: &mut Frame, area: Rect) {
    let border = if focused { Color::Yellow } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title_top(Line::from(field.label))
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(field.display_value()).block(block), area);

    if focused && inner.width > 0 {
        let col = field.cursor_column().min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + col, inner.y));
    }
}

fn render_button(form: &FormPane, frame: &mut Frame, area: Rect) {
    let focused = form.focus == Focus::Button;
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let label = format!("[ {} ]", form.kind.label());
    frame.render_widget(Paragraph::new(Line::styled(label, style)).centered(), area);
}

fn render_notice(app: &AppState, frame: &mut Frame, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    frame.render_widget(
        Paragraph::new(Line::styled(
            notice.text.clone(),
            Style::default().fg(color),
        )),
        area,
    );
}
