use chatgate_core::client::{
    DEFAULT_FAILURE_MESSAGE, DEFAULT_SUCCESS_MESSAGE, SERVER_ERROR_MESSAGE, SendErrorKind,
};
use chatgate_core::{
    AuthFeedback, AuthSubmitter, Config, LoginFields, RegisterFields, SendOutcome, Submission,
    ValidationError,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Default)]
struct Recorder {
    successes: Vec<String>,
    errors: Vec<String>,
    navigations: Vec<String>,
}

impl AuthFeedback for Recorder {
    fn on_success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn on_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn navigate(&mut self, location: &str) {
        self.navigations.push(location.to_string());
    }
}

fn submitter_for(server_url: &str) -> AuthSubmitter {
    let config = Config {
        server_url: server_url.to_string(),
        ..Default::default()
    };
    AuthSubmitter::from_config(&config).unwrap()
}

/// Returns a URL whose port has nothing listening on it.
fn dead_server_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

#[tokio::test]
async fn test_login_posts_credentials_and_navigates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(header("content-type", "application/json"))
        .and(body_json(
            json!({"email": "user@example.com", "password": "secret"}),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Welcome back!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut rec = Recorder::default();
    let result = submitter_for(&server.uri())
        .submit_login(&LoginFields::new("user@example.com", "secret"), &mut rec)
        .await;

    assert!(result.is_success());
    assert_eq!(rec.successes, vec!["Welcome back!"]);
    assert!(rec.errors.is_empty());
    assert_eq!(rec.navigations, vec!["/chat"]);
}

#[tokio::test]
async fn test_login_success_without_message_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let mut rec = Recorder::default();
    let result = submitter_for(&server.uri())
        .submit_login(&LoginFields::new("user@example.com", "secret"), &mut rec)
        .await;

    let Submission::Sent(SendOutcome::Accepted { message, reply }) = result else {
        panic!("expected accepted login, got {result:?}");
    };
    assert_eq!(message, DEFAULT_SUCCESS_MESSAGE);
    assert_eq!(reply, json!({"ok": true}));
    assert_eq!(rec.navigations, vec!["/chat"]);
}

#[tokio::test]
async fn test_non_string_message_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": 42})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": null})))
        .mount(&server)
        .await;

    let submitter = submitter_for(&server.uri());
    let mut rec = Recorder::default();
    let login = submitter
        .submit_login(&LoginFields::new("user@example.com", "secret"), &mut rec)
        .await;
    let register = submitter
        .submit_register(
            &RegisterFields::new("user@example.com", "user", "pw", "pw"),
            &mut rec,
        )
        .await;

    assert!(login.is_success());
    assert!(!register.is_success());
    assert_eq!(rec.successes, vec![DEFAULT_SUCCESS_MESSAGE]);
    assert_eq!(rec.errors, vec![DEFAULT_FAILURE_MESSAGE]);
}

#[tokio::test]
async fn test_register_success_does_not_navigate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .and(body_json(json!({
            "email": "u@e.com",
            "username": "name",
            "password": "pw",
            "password_check": "pw"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Registered!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut rec = Recorder::default();
    let result = submitter_for(&server.uri())
        .submit_register(&RegisterFields::new("u@e.com", "name", "pw", "pw"), &mut rec)
        .await;

    assert!(result.is_success());
    assert_eq!(rec.successes, vec!["Registered!"]);
    assert!(rec.navigations.is_empty());
}

#[tokio::test]
async fn test_register_mismatch_never_hits_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut rec = Recorder::default();
    let result = submitter_for(&server.uri())
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

#[tokio::test]
async fn test_blank_login_never_hits_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut rec = Recorder::default();
    let result = submitter_for(&server.uri())
        .submit_login(&LoginFields::new("user@example.com", "  "), &mut rec)
        .await;

    assert_eq!(result, Submission::Invalid(ValidationError::EmptyFields));
    assert_eq!(rec.errors, vec!["Please fill in all fields."]);
}

#[tokio::test]
async fn test_rejected_login_surfaces_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Wrong password"})),
        )
        .mount(&server)
        .await;

    let mut rec = Recorder::default();
    let result = submitter_for(&server.uri())
        .submit_login(&LoginFields::new("user@example.com", "nope"), &mut rec)
        .await;

    assert_eq!(
        result,
        Submission::Sent(SendOutcome::Rejected {
            status: 401,
            message: "Wrong password".to_string(),
        })
    );
    assert_eq!(rec.errors, vec!["Wrong password"]);
    assert!(rec.navigations.is_empty());
}

#[tokio::test]
async fn test_rejected_register_without_message_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"detail": "exists"})))
        .mount(&server)
        .await;

    let mut rec = Recorder::default();
    submitter_for(&server.uri())
        .submit_register(&RegisterFields::new("u@e.com", "name", "pw", "pw"), &mut rec)
        .await;

    assert_eq!(rec.errors, vec![DEFAULT_FAILURE_MESSAGE]);
}

#[tokio::test]
async fn test_malformed_reply_is_reported_as_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let mut rec = Recorder::default();
    let result = submitter_for(&server.uri())
        .submit_login(&LoginFields::new("user@example.com", "secret"), &mut rec)
        .await;

    let Submission::Sent(SendOutcome::Failed { message, error }) = result else {
        panic!("expected failure, got {result:?}");
    };
    assert_eq!(message, SERVER_ERROR_MESSAGE);
    assert_eq!(error.kind, SendErrorKind::Decode);
    assert_eq!(rec.errors, vec![SERVER_ERROR_MESSAGE]);
    assert!(rec.navigations.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_reported_as_server_error() {
    let mut rec = Recorder::default();
    let result = submitter_for(&dead_server_url())
        .submit_login(&LoginFields::new("user@example.com", "secret"), &mut rec)
        .await;

    let Submission::Sent(SendOutcome::Failed { error, .. }) = result else {
        panic!("expected failure, got {result:?}");
    };
    assert_eq!(error.kind, SendErrorKind::Transport);
    assert_eq!(rec.errors, vec![SERVER_ERROR_MESSAGE]);
    assert!(rec.successes.is_empty());
    assert!(rec.navigations.is_empty());
}

#[tokio::test]
async fn test_custom_prefix_and_post_login_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        server_url: server.uri(),
        auth_prefix: "api/v2/".to_string(),
        post_login_path: "/rooms".to_string(),
        ..Default::default()
    };
    let submitter = AuthSubmitter::from_config(&config).unwrap();

    let mut rec = Recorder::default();
    submitter
        .submit_login(&LoginFields::new("user@example.com", "secret"), &mut rec)
        .await;

    assert_eq!(rec.navigations, vec!["/rooms"]);
}
