mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}"); // pretty anyhow chain
            ExitCode::FAILURE
        }
    }
}
