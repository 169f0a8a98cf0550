//! Config command handlers.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chatgate_core::Config;

pub fn path(config_path: &Path) -> Result<ExitCode> {
    println!("{}", config_path.display());
    Ok(ExitCode::SUCCESS)
}

pub fn init(config_path: &Path) -> Result<ExitCode> {
    Config::init(config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(ExitCode::SUCCESS)
}
