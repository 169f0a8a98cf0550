//! Tab and form panes.
//!
//! These are the elements handed to the core `TabController`. A form keeps
//! its fields by name, so building a payload never depends on field order.

use chatgate_core::{Activatable, FormKind, LoginFields, RegisterFields, SubmitPhase};
use unicode_width::UnicodeWidthStr;

use crate::task::TaskId;

const MASK_CHAR: char = '•';

/// A single-line text input.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub secret: bool,
    value: String,
    /// Cursor position in chars.
    cursor: usize,
}

impl Field {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            secret: false,
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn secret(name: &'static str, label: &'static str) -> Self {
        Self {
            secret: true,
            ..Self::new(name, label)
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(idx, _)| idx)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Inserts pasted text; line breaks are dropped since fields are single-line.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Text as drawn on screen (masked for secrets).
    pub fn display_value(&self) -> String {
        if self.secret {
            MASK_CHAR.to_string().repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> u16 {
        if self.secret {
            return self.cursor as u16;
        }
        let prefix: String = self.value.chars().take(self.cursor).collect();
        prefix.width() as u16
    }
}

/// A tab header.
#[derive(Debug, Clone)]
pub struct TabPane {
    pub kind: FormKind,
    active: bool,
}

impl TabPane {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            active: false,
        }
    }
}

impl Activatable for TabPane {
    fn key(&self) -> &str {
        self.kind.tab_name()
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Focus target inside a form: one of the fields or the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Button,
}

/// A login or register form.
#[derive(Debug, Clone)]
pub struct FormPane {
    pub kind: FormKind,
    pub fields: Vec<Field>,
    pub focus: Focus,
    pub phase: SubmitPhase,
    /// In-flight submission, if any.
    pub task: Option<TaskId>,
    active: bool,
}

impl FormPane {
    pub fn new(kind: FormKind) -> Self {
        let fields = match kind {
            FormKind::Login => vec![
                Field::new("email", "Email"),
                Field::secret("password", "Password"),
            ],
            FormKind::Register => vec![
                Field::new("email", "Email"),
                Field::new("username", "Username"),
                Field::secret("password", "Password"),
                Field::secret("password_check", "Confirm password"),
            ],
        };
        Self {
            kind,
            fields,
            focus: Focus::Field(0),
            phase: SubmitPhase::Idle,
            task: None,
            active: false,
        }
    }

    /// Value of the named field, empty if there is no such field.
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map_or("", Field::value)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut Field> {
        match self.focus {
            Focus::Field(idx) => self.fields.get_mut(idx),
            Focus::Button => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Field(idx) if idx + 1 < self.fields.len() => Focus::Field(idx + 1),
            Focus::Field(_) => Focus::Button,
            Focus::Button => Focus::Field(0),
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Field(0) => Focus::Button,
            Focus::Field(idx) => Focus::Field(idx - 1),
            Focus::Button => Focus::Field(self.fields.len().saturating_sub(1)),
        };
    }

    pub fn login_fields(&self) -> LoginFields {
        LoginFields::new(self.value("email"), self.value("password"))
    }

    pub fn register_fields(&self) -> RegisterFields {
        RegisterFields::new(
            self.value("email"),
            self.value("username"),
            self.value("password"),
            self.value("password_check"),
        )
    }

    /// Clears password inputs after an attempt completes.
    pub fn clear_secrets(&mut self) {
        for field in self.fields.iter_mut().filter(|field| field.secret) {
            field.clear();
        }
    }
}

impl Activatable for FormPane {
    fn key(&self) -> &str {
        self.kind.form_id()
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
