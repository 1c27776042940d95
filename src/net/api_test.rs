use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::testing::FakeTransport;
use crate::util::storage::{MemoryStore, TokenStore};

fn client(transport: &FakeTransport) -> ApiClient<FakeTransport, MemoryStore> {
    ApiClient::new(transport.clone(), TokenStore::new(MemoryStore::new()), Rc::new(|| {}))
}

#[test]
fn post_detail_path_formats_expected_path() {
    assert_eq!(post_detail_path("essay-deadlines"), "blog/posts/essay-deadlines/");
}

#[test]
fn capture_payload_with_missing_order_id_serializes_null() {
    let payload = capture_payload("PAY-123", None);
    assert_eq!(payload, serde_json::json!({ "order_id": null, "payment_id": "PAY-123" }));
}

#[test]
fn capture_payload_carries_order_id_when_present() {
    let payload = capture_payload("PAY-123", Some("o-9"));
    assert_eq!(payload, serde_json::json!({ "order_id": "o-9", "payment_id": "PAY-123" }));
}

#[test]
fn login_posts_credentials_without_bearer() {
    let transport = FakeTransport::new();
    transport.push(200, r#"{"access":"a1","refresh":"r1"}"#);
    let api = client(&transport);

    let pair = block_on(api.login("alice", "hunter22")).unwrap();
    assert_eq!(pair.access, "a1");

    let calls = transport.calls();
    assert_eq!(calls[0].path, LOGIN_PATH);
    assert_eq!(calls[0].bearer, None);
    assert_eq!(
        calls[0].body,
        Some(serde_json::json!({ "username": "alice", "password": "hunter22" }))
    );
}

#[test]
fn login_rejection_surfaces_backend_message() {
    let transport = FakeTransport::new();
    transport.push(401, r#"{"error":"Invalid credentials"}"#);
    let api = client(&transport);

    let err = block_on(api.login("bob", "wrong")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    // A login 401 must not enter the token-refresh path.
    assert_eq!(transport.calls_to(TOKEN_REFRESH_PATH), 0);
}

#[test]
fn google_config_decodes_client_id() {
    let transport = FakeTransport::new();
    transport.push(200, r#"{"client_id":"cid-1.apps.googleusercontent.com"}"#);
    let api = client(&transport);

    let config = block_on(api.google_config()).unwrap();
    assert_eq!(config.client_id, "cid-1.apps.googleusercontent.com");
}

#[test]
fn capture_payment_posts_payload_to_capture_endpoint() {
    let transport = FakeTransport::new();
    transport.push(200, r#"{"status":"COMPLETED","order_id":"o-9"}"#);
    let api = client(&transport);

    let resp = block_on(api.capture_payment("PAY-123", None)).unwrap();
    assert_eq!(resp.status, "COMPLETED");

    let calls = transport.calls();
    assert_eq!(calls[0].path, CAPTURE_PATH);
    assert_eq!(
        calls[0].body,
        Some(serde_json::json!({ "order_id": null, "payment_id": "PAY-123" }))
    );
}

#[test]
fn fetch_post_uses_slug_path() {
    let transport = FakeTransport::new();
    transport.push(200, r#"{"slug":"citing-sources","title":"Citing Sources"}"#);
    let api = client(&transport);

    let post = block_on(api.fetch_post("citing-sources")).unwrap();
    assert_eq!(post.title, "Citing Sources");
    assert_eq!(transport.calls()[0].path, "blog/posts/citing-sources/");
}

#[test]
fn register_failure_maps_to_status_error() {
    let transport = FakeTransport::new();
    transport.push(400, r#"{"error":"Username already taken"}"#);
    let api = client(&transport);

    let err = block_on(api.register("alice", "a@b.com", "hunter22")).unwrap_err();
    assert_eq!(err.to_string(), "Username already taken");
}
