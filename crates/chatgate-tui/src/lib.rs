//! Full-screen login/register UI for chatgate.
//!
//! Elm-style layout: `state` holds the panes, `update` is the reducer,
//! `effects` are what it asks for, `runtime` executes them and draws via
//! `render`.

pub mod effects;
pub mod events;
pub mod feedback;
pub mod form;
pub mod render;
pub mod runtime;
pub mod state;
pub mod task;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use chatgate_core::AuthSubmitter;
pub use runtime::TuiRuntime;
pub use state::TuiExit;

/// Runs the interactive login screen.
///
/// Returns how the session ended; `TuiExit::Navigate` carries the
/// post-login location reported by the submitter.
///
/// # Errors
/// Returns an error if stdout is not a terminal, no tokio runtime is
/// entered, or terminal I/O fails.
pub fn run_login_screen(submitter: AuthSubmitter, server: String) -> Result<TuiExit> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The login screen requires a terminal.\n\
             Use `chatgate login` or `chatgate register` for non-interactive use."
        );
    }

    tracing::info!(%server, "starting login screen");
    let mut runtime = TuiRuntime::new(submitter, server)?;
    let exit = runtime.run();
    drop(runtime);
    tracing::info!(?exit, "login screen closed");
    exit
}
