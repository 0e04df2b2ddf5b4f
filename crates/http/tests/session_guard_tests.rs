//! Session guard flow tests, driven against a mock platform.

use pylon_core::SessionService;
use pylon_core::session::{CredentialBackend, MemoryBackend, Scope, keys};
use pylon_http::flows::{GuardOutcome, RedirectTarget, SessionGuard};
use pylon_http::paths;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn anonymous_session() -> SessionService<MemoryBackend> {
    SessionService::new(MemoryBackend::new())
}

fn identified_session(customer: Uuid) -> SessionService<MemoryBackend> {
    let service = SessionService::new(MemoryBackend::new());
    service.commit_login("api-token", customer);
    service
}

async fn mock_json(server: &MockServer, verb: &str, route: &str, status: u16, body: serde_json::Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn anonymous_viewer_runs_bootstrap_login_never_validation() {
    let server = MockServer::start().await;
    let customer = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(paths::INSECURE_LOGIN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiToken": "bootstrap-token",
            "customerUUID": customer,
        })))
        .expect(1)
        .mount(&server)
        .await;
    mock_json(&server, "GET", paths::CUSTOMER_COUNT, 200, json!({ "count": 4 })).await;
    Mock::given(method("GET"))
        .and(path(paths::SESSION_VALIDATE))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = anonymous_session();
    let guard = SessionGuard::new(server.uri(), &session).unwrap();
    let outcome = guard.check().await;

    assert_eq!(outcome, GuardOutcome::Redirect(RedirectTarget::Root));
    let creds = session.credentials();
    assert_eq!(creds.api_token.as_deref(), Some("bootstrap-token"));
    assert_eq!(creds.customer_id, Some(customer));
    assert!(session.is_first_run());
}

#[tokio::test]
async fn empty_platform_redirects_to_registration() {
    let server = MockServer::start().await;
    mock_json(&server, "POST", paths::INSECURE_LOGIN, 404, json!({})).await;
    mock_json(&server, "GET", paths::CUSTOMER_COUNT, 200, json!({ "count": 0 })).await;

    let session = anonymous_session();
    let guard = SessionGuard::new(server.uri(), &session).unwrap();

    assert_eq!(
        guard.check().await,
        GuardOutcome::Redirect(RedirectTarget::Register)
    );
}

#[tokio::test]
async fn bootstrap_fallback_lands_on_login_and_clears_partial_state() {
    let server = MockServer::start().await;
    mock_json(&server, "POST", paths::INSECURE_LOGIN, 404, json!({})).await;
    mock_json(&server, "GET", paths::CUSTOMER_COUNT, 200, json!({ "count": 3 })).await;

    // A token without a customer id is anonymous but not empty.
    let backend = MemoryBackend::new();
    backend.write(Scope::Persistent, keys::API_TOKEN, "orphan-token");
    let session = SessionService::new(backend);

    let guard = SessionGuard::new(server.uri(), &session).unwrap();
    assert_eq!(
        guard.check().await,
        GuardOutcome::Redirect(RedirectTarget::Login)
    );
    assert!(session.credentials().is_empty());
}

#[tokio::test]
async fn identified_viewer_validates_token_never_bootstraps() {
    let server = MockServer::start().await;
    let customer = Uuid::new_v4();
    let confirmed = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(paths::INSECURE_LOGIN))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(paths::SESSION_VALIDATE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "uuid": confirmed })))
        .expect(1)
        .mount(&server)
        .await;

    let session = identified_session(customer);
    let guard = SessionGuard::new(server.uri(), &session).unwrap();

    assert_eq!(guard.check().await, GuardOutcome::Proceed);
    // The validated id replaces the stored one.
    assert_eq!(session.credentials().customer_id, Some(confirmed));
}

#[tokio::test]
async fn forbidden_validation_clears_session_and_redirects_to_root() {
    let server = MockServer::start().await;
    mock_json(&server, "GET", paths::SESSION_VALIDATE, 403, json!({})).await;

    let session = identified_session(Uuid::new_v4());
    let guard = SessionGuard::new(server.uri(), &session).unwrap();

    assert_eq!(
        guard.check().await,
        GuardOutcome::Redirect(RedirectTarget::Root)
    );
    assert!(session.credentials().is_empty());
}

#[tokio::test]
async fn non_forbidden_failures_are_ignored() {
    let server = MockServer::start().await;
    mock_json(&server, "GET", paths::SESSION_VALIDATE, 500, json!({})).await;

    let customer = Uuid::new_v4();
    let session = identified_session(customer);
    let guard = SessionGuard::new(server.uri(), &session).unwrap();

    assert_eq!(guard.check().await, GuardOutcome::Proceed);
    assert_eq!(session.credentials().customer_id, Some(customer));
}

#[tokio::test]
async fn stale_accepted_session_is_dropped_but_navigation_proceeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(paths::SESSION_VALIDATE))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let session = identified_session(Uuid::new_v4());
    let guard = SessionGuard::new(server.uri(), &session).unwrap();

    assert_eq!(guard.check().await, GuardOutcome::Proceed);
    assert!(session.credentials().is_empty());
}

#[tokio::test]
async fn unreachable_platform_is_not_the_viewers_problem() {
    // Nothing listens on this port; the validation request fails at the
    // transport layer.
    let session = identified_session(Uuid::new_v4());
    let guard = SessionGuard::new("http://127.0.0.1:9", &session).unwrap();

    assert_eq!(guard.check().await, GuardOutcome::Proceed);
    assert_eq!(
        session.credentials().api_token.as_deref(),
        Some("api-token")
    );
}
