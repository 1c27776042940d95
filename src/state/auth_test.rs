use super::*;

fn user(name: &str) -> User {
    User {
        id: "1".to_owned(),
        username: name.to_owned(),
        email: format!("{name}@example.com"),
        is_staff: false,
        is_verified: true,
    }
}

#[test]
fn bootstrapping_state_is_loading_with_no_user() {
    let state = SessionState::bootstrapping();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_state_carries_user() {
    let state = SessionState::authenticated(user("alice"));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.user.unwrap().username, "alice");
}

#[test]
fn bootstrapping_is_distinct_from_anonymous() {
    // The entry state must not settle route guards early.
    assert_ne!(SessionState::bootstrapping(), SessionState::anonymous());
}

#[test]
fn anonymous_state_has_neither_user_nor_loading() {
    let state = SessionState::anonymous();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}
