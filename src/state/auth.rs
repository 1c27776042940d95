//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal` context at the app root. Route guards and
//! user-aware components read it synchronously to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Session state: the current user plus the bootstrap loading flag.
///
/// Starts as bootstrapping (`loading = true`) and settles into either
/// authenticated (`user` set) or anonymous once the persisted token has been
/// checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Initial state while the persisted token is being checked.
    pub fn bootstrapping() -> Self {
        Self { user: None, loading: true }
    }

    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
