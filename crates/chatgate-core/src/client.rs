//! HTTP client for the server's auth endpoints.
//!
//! Every call resolves to a [`SendOutcome`]; transport and decode failures are
//! logged and folded into `SendOutcome::Failed` instead of bubbling up.

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::Config;

/// Shown when a 2xx reply carries no `message`.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully!";
/// Shown when a non-2xx reply carries no `message`.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Request failed!";
/// Shown for transport and decode failures.
pub const SERVER_ERROR_MESSAGE: &str = "A server error occurred.";

const USER_AGENT: &str = concat!("chatgate/", env!("CARGO_PKG_VERSION"));

/// Categories of failures that never produced a usable reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendErrorKind {
    /// Connection refused, DNS, timeout, invalid URL
    Transport,
    /// Reply body was not JSON
    Decode,
}

impl fmt::Display for SendErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendErrorKind::Transport => write!(f, "transport"),
            SendErrorKind::Decode => write!(f, "decode"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendError {
    pub kind: SendErrorKind,
    pub message: String,
}

impl SendError {
    pub fn new(kind: SendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn transport(err: &impl fmt::Display) -> Self {
        Self::new(SendErrorKind::Transport, err.to_string())
    }

    fn decode(err: &impl fmt::Display) -> Self {
        Self::new(SendErrorKind::Decode, err.to_string())
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SendError {}

/// Result of one POST to an auth endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// 2xx with a JSON body.
    Accepted { message: String, reply: Value },
    /// Non-2xx with a JSON body.
    Rejected { status: u16, message: String },
    /// No usable reply.
    Failed { message: String, error: SendError },
}

impl SendOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SendOutcome::Accepted { .. })
    }

    /// The user-facing message for this outcome.
    pub fn message(&self) -> &str {
        match self {
            SendOutcome::Accepted { message, .. }
            | SendOutcome::Rejected { message, .. }
            | SendOutcome::Failed { message, .. } => message,
        }
    }

    fn failed(error: SendError) -> Self {
        SendOutcome::Failed {
            message: SERVER_ERROR_MESSAGE.to_string(),
            error,
        }
    }
}

/// Extracts a non-empty `message` string from a reply body.
fn reply_message(reply: &Value) -> Option<&str> {
    reply
        .get("message")
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty())
}

/// Auth API client.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: Url,
    prefix: String,
}

impl AuthClient {
    /// Creates a client from config (server URL, prefix, timeout).
    ///
    /// # Errors
    /// Returns an error if the server URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url()?,
            prefix: config.auth_prefix.clone(),
        })
    }

    /// Resolves `prefix + endpoint` against the base URL.
    ///
    /// # Errors
    /// Returns an error if the joined path is not a valid URL.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(&format!("{}{endpoint}", self.prefix))
    }

    /// POSTs `payload` as JSON to the prefixed endpoint.
    pub async fn send<P: Serialize + ?Sized>(&self, endpoint: &str, payload: &P) -> SendOutcome {
        let url = match self.endpoint_url(endpoint) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(endpoint, error = %e, "invalid auth endpoint");
                return SendOutcome::failed(SendError::transport(&e));
            }
        };

        tracing::debug!(%url, "sending auth request");
        let response = match self.http.post(url.clone()).json(payload).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(%url, error = %e, "auth request failed");
                return SendOutcome::failed(SendError::transport(&e));
            }
        };

        let status = response.status();
        let reply: Value = match response.json().await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(%url, %status, error = %e, "auth reply is not JSON");
                return SendOutcome::failed(SendError::decode(&e));
            }
        };

        if status.is_success() {
            tracing::info!(%url, %status, "auth request accepted");
            let message = reply_message(&reply)
                .unwrap_or(DEFAULT_SUCCESS_MESSAGE)
                .to_string();
            SendOutcome::Accepted { message, reply }
        } else {
            tracing::warn!(%url, %status, "auth request rejected");
            SendOutcome::Rejected {
                status: status.as_u16(),
                message: reply_message(&reply)
                    .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                    .to_string(),
            }
        }
    }
}
