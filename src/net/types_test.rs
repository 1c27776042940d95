use super::*;

#[test]
fn user_defaults_role_flags_when_absent() {
    let user: User = serde_json::from_str(r#"{"id":"1","username":"alice"}"#).unwrap();
    assert_eq!(user.username, "alice");
    assert!(!user.is_staff);
    assert!(!user.is_verified);
    assert_eq!(user.email, "");
}

#[test]
fn refresh_response_without_rotation_has_no_refresh() {
    let resp: RefreshResponse = serde_json::from_str(r#"{"access":"a2"}"#).unwrap();
    assert_eq!(resp.access, "a2");
    assert_eq!(resp.refresh, None);
}

#[test]
fn google_login_response_defaults_created_flag() {
    let resp: GoogleLoginResponse = serde_json::from_str(
        r#"{"access":"a","user":{"id":"1","username":"alice"}}"#,
    )
    .unwrap();
    assert!(!resp.created);
    assert_eq!(resp.refresh, None);
}

#[test]
fn order_pages_accepts_whole_float() {
    let order: Order = serde_json::from_str(
        r#"{"id":"o1","topic":"t","subject":"History","status":"pending_payment",
            "pages":3.0,"deadline":"2026-09-15T00:00:00Z","price":"45.00"}"#,
    )
    .unwrap();
    assert_eq!(order.pages, 3);
    assert_eq!(order.approval_url, None);
}

#[test]
fn review_rating_rejects_fractional_number() {
    let result = serde_json::from_str::<Review>(
        r#"{"id":"r1","author":"bob","rating":4.5,"body":"good"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn api_error_body_prefers_error_over_detail() {
    let body: ApiErrorBody =
        serde_json::from_str(r#"{"error":"Invalid credentials","detail":"nope"}"#).unwrap();
    assert_eq!(body.message(), Some("Invalid credentials"));
}

#[test]
fn api_error_body_falls_back_to_detail() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"detail":"Not found."}"#).unwrap();
    assert_eq!(body.message(), Some("Not found."));
}

#[test]
fn api_error_body_empty_object_has_no_message() {
    let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message(), None);
}

#[test]
fn draft_order_serializes_all_fields() {
    let draft = DraftOrder {
        topic: "The Treaty of Westphalia".to_owned(),
        subject_id: "s1".to_owned(),
        academic_level: "undergraduate".to_owned(),
        pages: 5,
        deadline: "2026-09-15T00:00:00Z".to_owned(),
        instructions: "APA style".to_owned(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["subject_id"], "s1");
    assert_eq!(value["pages"], 5);
}
