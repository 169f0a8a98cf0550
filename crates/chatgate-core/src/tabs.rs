//! Tab switching between the login and register panes.
//!
//! A tab named `login` selects the form keyed `loginForm`; every other tab and
//! form is deactivated. Elements are handed over once at construction, so a
//! front end (or a test) supplies its own element types.

use std::fmt;

/// A UI element that can carry the "active" visual state.
pub trait Activatable {
    /// Identifier used for lookup (tab name or form id).
    fn key(&self) -> &str;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// Derives the form identifier for a tab name (`login` → `loginForm`).
pub fn form_id(tab_name: &str) -> String {
    format!("{tab_name}Form")
}

/// The two auth forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    pub const ALL: [FormKind; 2] = [FormKind::Login, FormKind::Register];

    /// Name carried by the form's tab.
    pub fn tab_name(self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Register => "register",
        }
    }

    pub fn form_id(self) -> &'static str {
        match self {
            FormKind::Login => "loginForm",
            FormKind::Register => "registerForm",
        }
    }

    pub fn button_id(self) -> &'static str {
        match self {
            FormKind::Login => "loginButton",
            FormKind::Register => "registerButton",
        }
    }

    /// Endpoint relative to the auth prefix.
    pub fn endpoint(self) -> &'static str {
        match self {
            FormKind::Login => "login/",
            FormKind::Register => "register/",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormKind::Login => "Login",
            FormKind::Register => "Register",
        }
    }
}

/// Lookup failure when selecting a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    MissingTab(String),
    MissingForm(String),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::MissingTab(name) => write!(f, "no tab named '{name}'"),
            TabError::MissingForm(id) => write!(f, "no form with id '{id}'"),
        }
    }
}

impl std::error::Error for TabError {}

/// Owns the tab and form elements and keeps exactly one of each active.
#[derive(Debug)]
pub struct TabController<T, F> {
    tabs: Vec<T>,
    forms: Vec<F>,
}

impl<T: Activatable, F: Activatable> TabController<T, F> {
    pub fn new(tabs: Vec<T>, forms: Vec<F>) -> Self {
        Self { tabs, forms }
    }

    /// Activates `name` and its `<name>Form`, deactivating everything else.
    ///
    /// Both lookups happen before any element changes, so an error leaves
    /// the current selection as it was. Re-selecting the active tab is a no-op
    /// in effect.
    ///
    /// # Errors
    /// Returns `TabError` if the tab or its form does not exist.
    pub fn show_tab(&mut self, name: &str) -> Result<(), TabError> {
        let tab_idx = self
            .tabs
            .iter()
            .position(|tab| tab.key() == name)
            .ok_or_else(|| TabError::MissingTab(name.to_string()))?;
        let form_key = form_id(name);
        let form_idx = self
            .forms
            .iter()
            .position(|form| form.key() == form_key)
            .ok_or(TabError::MissingForm(form_key))?;

        for tab in &mut self.tabs {
            tab.set_active(false);
        }
        for form in &mut self.forms {
            form.set_active(false);
        }
        self.tabs[tab_idx].set_active(true);
        self.forms[form_idx].set_active(true);
        Ok(())
    }

    pub fn active_tab(&self) -> Option<&T> {
        self.tabs.iter().find(|tab| tab.is_active())
    }

    pub fn active_form(&self) -> Option<&F> {
        self.forms.iter().find(|form| form.is_active())
    }

    pub fn active_form_mut(&mut self) -> Option<&mut F> {
        self.forms.iter_mut().find(|form| form.is_active())
    }

    pub fn tabs(&self) -> &[T] {
        &self.tabs
    }

    pub fn forms(&self) -> &[F] {
        &self.forms
    }

    pub fn form_mut(&mut self, id: &str) -> Option<&mut F> {
        self.forms.iter_mut().find(|form| form.key() == id)
    }

    /// Selects the tab after the active one, wrapping around.
    ///
    /// # Errors
    /// Returns `TabError` if the next tab has no matching form.
    pub fn next_tab(&mut self) -> Result<(), TabError> {
        self.step(1)
    }

    /// Selects the tab before the active one, wrapping around.
    ///
    /// # Errors
    /// Returns `TabError` if the previous tab has no matching form.
    pub fn prev_tab(&mut self) -> Result<(), TabError> {
        self.step(self.tabs.len().saturating_sub(1))
    }

    fn step(&mut self, offset: usize) -> Result<(), TabError> {
        if self.tabs.is_empty() {
            return Ok(());
        }
        let current = self
            .tabs
            .iter()
            .position(Activatable::is_active)
            .unwrap_or(0);
        let next = (current + offset) % self.tabs.len();
        let name = self.tabs[next].key().to_string();
        self.show_tab(&name)
    }
}
