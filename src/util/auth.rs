//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior,
//! carrying the originally requested path so login can return the user
//! where they were headed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::SessionState;

/// True once bootstrap has settled and no user is present.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// The login entry point, with the requested path as a `next` return target.
pub fn login_redirect_target(requested: &str) -> String {
    if requested.is_empty() || requested == "/" {
        return "/login".to_owned();
    }
    format!("/login?next={}", encode_query_component(requested))
}

/// Resolve the post-login destination from the `next` query parameter.
/// Only same-origin absolute paths are accepted.
pub fn next_or_default(next: Option<&str>) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/orders".to_owned(),
    }
}

/// Percent-encode a query-string value, leaving path separators readable.
pub fn encode_query_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Redirect to the login entry point whenever auth has settled anonymous,
/// preserving the requested path as the return target.
pub fn install_unauth_redirect<F>(
    session: RwSignal<SessionState>,
    requested_path: String,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if should_redirect_unauth(&state) {
            navigate(&login_redirect_target(&requested_path), NavigateOptions::default());
        }
    });
}

/// Full-page navigation to the login entry point. Used by the API client's
/// session-expired hook, which runs outside the component tree.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
