//! Client-side form validation, applied before any network call.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::DraftOrder;

/// Minimal email shape check: one `@` with a dotted domain after it.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Enter a valid email address.".to_owned());
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err("Enter a valid email address.".to_owned());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.".to_owned());
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), String> {
    let username = username.trim();
    if username.len() < 3 || username.len() > 30 {
        return Err("Username must be 3-30 characters.".to_owned());
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-') {
        return Err("Username may only contain letters, digits, '.', '_' and '-'.".to_owned());
    }
    Ok(())
}

/// OTPs are 6 decimal digits.
pub fn validate_otp(otp: &str) -> Result<(), String> {
    let otp = otp.trim();
    if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter the 6-digit code from your email.".to_owned());
    }
    Ok(())
}

pub fn validate_order(draft: &DraftOrder) -> Result<(), String> {
    if draft.topic.trim().is_empty() {
        return Err("Enter a topic for your paper.".to_owned());
    }
    if draft.subject_id.is_empty() {
        return Err("Choose a subject.".to_owned());
    }
    if draft.pages < 1 {
        return Err("Order at least one page.".to_owned());
    }
    if draft.deadline.trim().is_empty() {
        return Err("Choose a deadline.".to_owned());
    }
    Ok(())
}
