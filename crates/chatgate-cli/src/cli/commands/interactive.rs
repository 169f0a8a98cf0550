//! Interactive login screen.

use std::process::ExitCode;

use anyhow::Result;
use chatgate_core::{AuthSubmitter, Config};
use chatgate_tui::TuiExit;

pub fn run(config: &Config) -> Result<ExitCode> {
    let submitter = AuthSubmitter::from_config(config)?;
    match chatgate_tui::run_login_screen(submitter, config.server_url.clone())? {
        TuiExit::Quit => {}
        TuiExit::Navigate(location) => super::continue_at(config, &location),
    }
    Ok(ExitCode::SUCCESS)
}
