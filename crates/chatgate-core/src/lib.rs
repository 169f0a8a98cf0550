//! Core of chatgate: form validation, tab switching and the auth request flow.
//!
//! Nothing in here touches a terminal. Front ends implement
//! [`tabs::Activatable`] for their panes and [`submit::AuthFeedback`] for
//! user-visible messages, then drive [`submit::AuthSubmitter`].

pub mod client;
pub mod config;
pub mod logging;
pub mod submit;
pub mod tabs;
pub mod validate;

pub use client::{AuthClient, SendError, SendOutcome};
pub use config::Config;
pub use submit::{AuthFeedback, AuthSubmitter, SubmitPhase, Submission};
pub use tabs::{Activatable, FormKind, TabController, TabError};
pub use validate::{LoginFields, RegisterFields, ValidationError, fields_filled};
