//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only, so the reducer stays pure.

use chatgate_core::{FormKind, LoginFields, RegisterFields, ValidationError};

use crate::task::TaskId;

/// Payload for one submission, already shaped per form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPayload {
    Login(LoginFields),
    Register(RegisterFields),
}

impl SubmitPayload {
    pub fn kind(&self) -> FormKind {
        match self {
            SubmitPayload::Login(_) => FormKind::Login,
            SubmitPayload::Register(_) => FormKind::Register,
        }
    }

    /// # Errors
    /// Returns the first failed client-side check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            SubmitPayload::Login(fields) => fields.validate(),
            SubmitPayload::Register(fields) => fields.validate(),
        }
    }
}

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Stop the event loop.
    Quit,

    /// Send a validated form to the server.
    Submit { task: TaskId, payload: SubmitPayload },
}
