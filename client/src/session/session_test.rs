use super::*;
use crate::net::transport::scripted::ScriptedTransport;
use futures::executor::block_on;
use super::store::{AUTH_TOKEN_KEY, KeyValueStore, MemoryStorage, SERVER_KEY};

fn credentials() -> Credentials {
    Credentials {
        server: "http://dns.test:8080".to_owned(),
        username: "admin".to_owned(),
        password: "secret".to_owned(),
    }
}

fn logged_in_session(transport: ScriptedTransport) -> Session<MemoryStorage, ScriptedTransport> {
    let session = Session::new(MemoryStorage::new(), transport);
    session.store().save("http://dns.test:8080", "tok-1");
    session
}

// =============================================================
// Liveness
// =============================================================

#[test]
fn no_token_is_logged_out_without_request() {
    let session = Session::new(MemoryStorage::new(), ScriptedTransport::new().respond(200, ""));
    assert!(!block_on(session.is_logged_in()));
    assert!(session.client().transport().requests().is_empty());
}

#[test]
fn token_without_server_is_logged_out_without_request() {
    let storage = MemoryStorage::new();
    storage.set(AUTH_TOKEN_KEY, "tok-1");
    let session = Session::new(storage, ScriptedTransport::new().respond(200, ""));
    assert!(!block_on(session.is_logged_in()));
    assert!(session.client().transport().requests().is_empty());
}

#[test]
fn accepted_token_is_logged_in() {
    let session = logged_in_session(ScriptedTransport::new().respond(200, "{}"));
    assert!(block_on(session.is_logged_in()));

    let requests = session.client().transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://dns.test:8080/1/run");
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer tok-1"));
}

#[test]
fn rejected_token_is_logged_out() {
    for status in [401, 500] {
        let session = logged_in_session(ScriptedTransport::new().respond(status, ""));
        assert!(!block_on(session.is_logged_in()), "status {status}");
    }
}

#[test]
fn failed_liveness_request_is_logged_out() {
    let session = logged_in_session(ScriptedTransport::new().fail("offline"));
    assert!(!block_on(session.is_logged_in()));
}

#[test]
fn rejected_token_is_kept_until_logout() {
    let session = logged_in_session(ScriptedTransport::new().respond(401, ""));
    assert!(!block_on(session.is_logged_in()));
    assert_eq!(session.store().auth_token().as_deref(), Some("tok-1"));
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_persists_server_and_token_and_navigates_to_root() {
    let session = Session::new(MemoryStorage::new(), ScriptedTransport::new().respond(200, r#"{"token":"tok-9"}"#));
    let mut navigated = None;

    block_on(session.log_in(&credentials(), |path| navigated = Some(path.to_owned()))).unwrap();

    assert_eq!(navigated.as_deref(), Some("/"));
    assert_eq!(session.store().storage().get(SERVER_KEY).as_deref(), Some("http://dns.test:8080"));
    assert_eq!(session.store().storage().get(AUTH_TOKEN_KEY).as_deref(), Some("tok-9"));
    assert_eq!(session.server().as_deref(), Some("http://dns.test:8080"));
}

#[test]
fn login_with_bad_credentials_persists_nothing() {
    let session = Session::new(MemoryStorage::new(), ScriptedTransport::new().respond(401, ""));
    let mut navigated = false;

    let err = block_on(session.log_in(&credentials(), |_| navigated = true)).unwrap_err();

    assert_eq!(err.to_string(), "Invalid username or password");
    assert!(!navigated);
    assert!(session.store().storage().is_empty());
}

#[test]
fn login_network_failure_reports_network_error() {
    let session = Session::new(MemoryStorage::new(), ScriptedTransport::new().fail("connection refused"));
    let err = block_on(session.log_in(&credentials(), |_| {})).unwrap_err();
    assert_eq!(err.to_string(), "Network error");
    assert!(session.store().storage().is_empty());
}

#[test]
fn login_replaces_previous_session() {
    let session = logged_in_session(ScriptedTransport::new().respond(200, r#"{"token":"tok-2"}"#));
    let creds = Credentials { server: "http://other.test".to_owned(), ..credentials() };
    block_on(session.log_in(&creds, |_| {})).unwrap();
    assert_eq!(session.server().as_deref(), Some("http://other.test"));
    assert_eq!(session.store().auth_token().as_deref(), Some("tok-2"));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_both_keys() {
    let session = logged_in_session(ScriptedTransport::new());
    session.log_out();
    assert!(session.store().storage().get(SERVER_KEY).is_none());
    assert!(session.store().storage().get(AUTH_TOKEN_KEY).is_none());
    assert!(session.client().transport().requests().is_empty());
}

#[test]
fn logout_without_session_is_harmless() {
    let session = Session::new(MemoryStorage::new(), ScriptedTransport::new());
    session.log_out();
    assert!(session.store().storage().is_empty());
}
