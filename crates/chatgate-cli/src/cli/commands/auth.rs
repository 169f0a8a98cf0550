//! Non-interactive login and registration.

use std::process::ExitCode;

use anyhow::Result;
use chatgate_core::{AuthFeedback, AuthSubmitter, Config, LoginFields, RegisterFields};

/// Prints results as they arrive: successes to stdout, errors to stderr.
#[derive(Debug, Default)]
struct ConsoleFeedback {
    location: Option<String>,
}

impl AuthFeedback for ConsoleFeedback {
    fn on_success(&mut self, message: &str) {
        println!("{message}");
    }

    fn on_error(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn navigate(&mut self, location: &str) {
        self.location = Some(location.to_string());
    }
}

pub async fn login(config: &Config, email: String, password: String) -> Result<ExitCode> {
    let submitter = AuthSubmitter::from_config(config)?;
    let mut feedback = ConsoleFeedback::default();
    let submission = submitter
        .submit_login(&LoginFields::new(email, password), &mut feedback)
        .await;

    if let Some(location) = feedback.location.as_deref() {
        super::continue_at(config, location);
    }
    Ok(exit_code(submission.is_success()))
}

pub async fn register(config: &Config, fields: RegisterFields) -> Result<ExitCode> {
    let submitter = AuthSubmitter::from_config(config)?;
    let mut feedback = ConsoleFeedback::default();
    let submission = submitter.submit_register(&fields, &mut feedback).await;
    Ok(exit_code(submission.is_success()))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
