use super::*;

#[test]
fn return_params_requires_payment_token() {
    assert!(return_params(None, None).is_err());
    assert!(return_params(Some("   ".to_owned()), None).is_err());
}

#[test]
fn return_params_passes_missing_order_id_as_none() {
    let (payment_id, order_id) = return_params(Some("PAY-123".to_owned()), None).unwrap();
    assert_eq!(payment_id, "PAY-123");
    assert_eq!(order_id, None);
}

#[test]
fn return_params_filters_empty_order_id() {
    let (_, order_id) = return_params(Some("PAY-123".to_owned()), Some(String::new())).unwrap();
    assert_eq!(order_id, None);
}

#[test]
fn return_params_keeps_order_id_when_present() {
    let (_, order_id) =
        return_params(Some("PAY-123".to_owned()), Some("o-9".to_owned())).unwrap();
    assert_eq!(order_id, Some("o-9".to_owned()));
}
