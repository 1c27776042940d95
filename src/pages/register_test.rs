use super::*;

#[test]
fn validate_registration_trims_username_and_email() {
    let (username, email, password) =
        validate_registration(" alice ", " alice@example.com ", "hunter22").unwrap();
    assert_eq!(username, "alice");
    assert_eq!(email, "alice@example.com");
    assert_eq!(password, "hunter22");
}

#[test]
fn validate_registration_rejects_each_bad_field() {
    assert!(validate_registration("a", "alice@example.com", "hunter22").is_err());
    assert!(validate_registration("alice", "not-an-email", "hunter22").is_err());
    assert!(validate_registration("alice", "alice@example.com", "short").is_err());
}

#[test]
fn verify_email_target_encodes_address() {
    assert_eq!(
        verify_email_target("alice@example.com"),
        "/verify-email?email=alice%40example.com"
    );
}
