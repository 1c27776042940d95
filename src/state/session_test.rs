use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::api::{CURRENT_USER_PATH, LOGOUT_PATH};
use crate::net::client::ApiClient;
use crate::net::testing::FakeTransport;
use crate::util::storage::{MemoryStore, TokenStore};

fn session_with(
    transport: &FakeTransport,
) -> (Session<FakeTransport, MemoryStore>, TokenStore<MemoryStore>) {
    let store = MemoryStore::new();
    let tokens = TokenStore::new(store.clone());
    let client = ApiClient::new(transport.clone(), TokenStore::new(store), Rc::new(|| {}));
    (Session::new(client), tokens)
}

#[test]
fn bootstrap_without_token_is_anonymous_with_no_network_call() {
    let transport = FakeTransport::new();
    let (session, _) = session_with(&transport);

    let state = block_on(session.bootstrap());
    assert_eq!(state, SessionState::anonymous());
    assert!(transport.calls().is_empty());
}

#[test]
fn bootstrap_with_valid_token_authenticates() {
    let transport = FakeTransport::new();
    transport.push(200, r#"{"id":"1","username":"alice"}"#);
    let (session, tokens) = session_with(&transport);
    tokens.store_pair("a1", Some("r1"));

    let state = block_on(session.bootstrap());
    assert!(!state.loading);
    assert_eq!(state.user.unwrap().username, "alice");
    assert_eq!(transport.calls_to(CURRENT_USER_PATH), 1);
}

#[test]
fn bootstrap_with_rejected_token_clears_tokens_and_goes_anonymous() {
    let transport = FakeTransport::new();
    // Profile fetch fails and so does the refresh attempt behind it.
    transport.push(401, "{}");
    transport.push(401, r#"{"error":"Token is invalid"}"#);
    let (session, tokens) = session_with(&transport);
    tokens.store_pair("a1", Some("r1"));

    let state = block_on(session.bootstrap());
    assert_eq!(state, SessionState::anonymous());
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
}

#[test]
fn login_persists_pair_and_fetches_profile() {
    let transport = FakeTransport::new();
    transport.push(200, r#"{"access":"a1","refresh":"r1"}"#);
    transport.push(200, r#"{"id":"1","username":"alice"}"#);
    let (session, tokens) = session_with(&transport);

    let user = block_on(session.login("alice", "hunter22")).unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(tokens.access_token(), Some("a1".to_owned()));
    assert_eq!(tokens.refresh_token(), Some("r1".to_owned()));
    // Profile fetch carried the freshly issued access token.
    assert_eq!(transport.calls()[1].bearer, Some("a1".to_owned()));
}

#[test]
fn rejected_login_persists_nothing_and_surfaces_message() {
    let transport = FakeTransport::new();
    transport.push(401, r#"{"error":"Invalid credentials"}"#);
    let (session, tokens) = session_with(&transport);

    let err = block_on(session.login("bob", "wrong")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(tokens.access_token(), None);
    assert_eq!(transport.calls().len(), 1);
}

#[test]
fn google_login_success_reports_created_flag() {
    let transport = FakeTransport::new();
    transport.push(
        200,
        r#"{"access":"a1","refresh":"r1","created":true,
            "user":{"id":"1","username":"alice"}}"#,
    );
    let (session, tokens) = session_with(&transport);

    let outcome = block_on(session.login_with_google("ya29.provider-token"));
    match outcome {
        GoogleLoginOutcome::Success { user, created } => {
            assert!(created);
            assert_eq!(user.username, "alice");
        }
        GoogleLoginOutcome::Failed { message } => panic!("unexpected failure: {message}"),
    }
    assert_eq!(tokens.access_token(), Some("a1".to_owned()));
}

#[test]
fn google_login_failure_is_a_structured_outcome() {
    let transport = FakeTransport::new();
    transport.push(400, r#"{"error":"Token exchange failed"}"#);
    let (session, tokens) = session_with(&transport);

    let outcome = block_on(session.login_with_google("bad-token"));
    assert_eq!(
        outcome,
        GoogleLoginOutcome::Failed { message: "Token exchange failed".to_owned() }
    );
    assert_eq!(tokens.access_token(), None);
}

#[test]
fn register_issues_no_tokens() {
    let transport = FakeTransport::new();
    transport.push(201, "{}");
    let (session, tokens) = session_with(&transport);

    block_on(session.register("alice", "alice@example.com", "hunter22")).unwrap();
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
}

#[test]
fn logout_clears_tokens_even_when_backend_call_fails() {
    let transport = FakeTransport::new();
    transport.push_err(crate::net::client::ApiError::Network("connection reset".to_owned()));
    let (session, tokens) = session_with(&transport);
    tokens.store_pair("a1", Some("r1"));

    let state = block_on(session.logout());
    assert_eq!(state, SessionState::anonymous());
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
}

#[test]
fn logout_presents_refresh_token_for_blacklisting() {
    let transport = FakeTransport::new();
    let (session, tokens) = session_with(&transport);
    tokens.store_pair("a1", Some("r1"));

    block_on(session.logout());
    let calls = transport.calls();
    assert_eq!(calls[0].path, LOGOUT_PATH);
    assert_eq!(calls[0].body, Some(serde_json::json!({ "refresh": "r1" })));
}

#[test]
fn verify_email_and_resend_are_pass_through() {
    let transport = FakeTransport::new();
    transport.push(200, "{}");
    transport.push(200, "{}");
    let (session, tokens) = session_with(&transport);

    block_on(session.verify_email("alice@example.com", "482913")).unwrap();
    block_on(session.resend_otp("alice@example.com")).unwrap();
    assert_eq!(tokens.access_token(), None);
}
