//! Login and registration submission.
//!
//! One attempt runs Idle → Validating → Submitting → Idle. Validation failures
//! never touch the network. Every outcome is reported through
//! [`AuthFeedback`]; only an accepted login requests navigation.

use crate::client::{AuthClient, SendOutcome};
use crate::config::Config;
use crate::tabs::FormKind;
use crate::validate::{LoginFields, RegisterFields, ValidationError};

/// Receives user-visible results of a submission.
pub trait AuthFeedback {
    fn on_success(&mut self, message: &str);
    fn on_error(&mut self, message: &str);
    /// Called after an accepted login with the post-login location.
    fn navigate(&mut self, location: &str);
}

/// Where a form's current attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

impl SubmitPhase {
    pub fn is_busy(self) -> bool {
        !matches!(self, SubmitPhase::Idle)
    }
}

/// What happened to one attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Stopped before the network.
    Invalid(ValidationError),
    /// A request went out.
    Sent(SendOutcome),
}

impl Submission {
    pub fn is_success(&self) -> bool {
        matches!(self, Submission::Sent(outcome) if outcome.is_success())
    }
}

/// Drives both forms against one client.
#[derive(Debug, Clone)]
pub struct AuthSubmitter {
    client: AuthClient,
    post_login_path: String,
}

impl AuthSubmitter {
    pub fn new(client: AuthClient, post_login_path: impl Into<String>) -> Self {
        Self {
            client,
            post_login_path: post_login_path.into(),
        }
    }

    /// Builds the client and submitter from config.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            AuthClient::new(config)?,
            config.post_login_path.clone(),
        ))
    }

    pub async fn submit_login(
        &self,
        fields: &LoginFields,
        feedback: &mut impl AuthFeedback,
    ) -> Submission {
        if let Err(err) = fields.validate() {
            return reject(FormKind::Login, err, feedback);
        }
        let submission = self.send(FormKind::Login, fields, feedback).await;
        if submission.is_success() {
            tracing::info!(location = %self.post_login_path, "login accepted, navigating");
            feedback.navigate(&self.post_login_path);
        }
        submission
    }

    pub async fn submit_register(
        &self,
        fields: &RegisterFields,
        feedback: &mut impl AuthFeedback,
    ) -> Submission {
        if let Err(err) = fields.validate() {
            return reject(FormKind::Register, err, feedback);
        }
        self.send(FormKind::Register, fields, feedback).await
    }

    async fn send<P: serde::Serialize>(
        &self,
        kind: FormKind,
        payload: &P,
        feedback: &mut impl AuthFeedback,
    ) -> Submission {
        let outcome = self.client.send(kind.endpoint(), payload).await;
        if outcome.is_success() {
            feedback.on_success(outcome.message());
        } else {
            feedback.on_error(outcome.message());
        }
        Submission::Sent(outcome)
    }
}

fn reject(kind: FormKind, err: ValidationError, feedback: &mut impl AuthFeedback) -> Submission {
    tracing::debug!(form = kind.form_id(), reason = %err, "submission blocked");
    feedback.on_error(&err.to_string());
    Submission::Invalid(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        errors: Vec<String>,
        navigations: Vec<String>,
    }

    impl AuthFeedback for Recorder {
        fn on_success(&mut self, _message: &str) {}

        fn on_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn navigate(&mut self, location: &str) {
            self.navigations.push(location.to_string());
        }
    }

    fn submitter() -> AuthSubmitter {
        // Port 9 (discard) is never contacted: every case here fails validation.
        let config = Config {
            server_url: "http://127.0.0.1:9/".to_string(),
            ..Default::default()
        };
        AuthSubmitter::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_empty_login_is_blocked() {
        let mut rec = Recorder::default();
        let result = submitter()
            .submit_login(&LoginFields::new("", "secret"), &mut rec)
            .await;
        assert_eq!(result, Submission::Invalid(ValidationError::EmptyFields));
        assert_eq!(rec.errors, vec!["Please fill in all fields."]);
        assert!(rec.navigations.is_empty());
    }

    #[tokio::test]
    async fn test_mismatched_register_is_blocked() {
        let mut rec = Recorder::default();
        let result = submitter()
            .submit_register(
                &RegisterFields::new("u@e.com", "name", "pw1", "pw2"),
                &mut rec,
            )
            .await;
        assert_eq!(
            result,
            Submission::Invalid(ValidationError::PasswordMismatch)
        );
        assert_eq!(rec.errors, vec!["Passwords do not match."]);
    }

    #[test]
    fn test_phase_busy() {
        assert!(!SubmitPhase::Idle.is_busy());
        assert!(SubmitPhase::Validating.is_busy());
        assert!(SubmitPhase::Submitting.is_busy());
    }
}
