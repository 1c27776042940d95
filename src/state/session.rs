//! Session operations: bootstrap, login, Google login, registration, email
//! verification, and logout.
//!
//! DESIGN
//! ======
//! `Session` wraps the authenticated `ApiClient` and returns plain state
//! values; the Leptos layer feeds them into the `RwSignal<SessionState>`
//! context. Keeping the transitions signal-free lets the whole state machine
//! run under an in-memory transport in unit tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::client::{ApiClient, ApiError, Transport};
use crate::net::types::User;
use crate::state::auth::SessionState;
use crate::util::storage::KeyValueStore;

/// Outcome of a Google login attempt. Failures are data, not errors, so the
/// login page can render the message without unwinding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GoogleLoginOutcome {
    Success {
        user: User,
        /// True when the exchange created a new account.
        created: bool,
    },
    Failed {
        message: String,
    },
}

/// The single per-tab session container. Cheap to clone; clones share the
/// underlying token store and refresh gate.
pub struct Session<T, S> {
    client: ApiClient<T, S>,
}

impl<T: Clone, S: Clone> Clone for Session<T, S> {
    fn clone(&self) -> Self {
        Self { client: self.client.clone() }
    }
}

impl<T: Transport, S: KeyValueStore> Session<T, S> {
    pub fn new(client: ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T, S> {
        &self.client
    }

    /// Resolve the initial session state from the persisted token.
    ///
    /// No persisted access token means anonymous with no network call. An
    /// unrecoverable profile fetch (the client's own refresh path has already
    /// had its chance) clears the tokens.
    pub async fn bootstrap(&self) -> SessionState {
        if self.client.tokens().access_token().is_none() {
            return SessionState::anonymous();
        }
        match self.client.fetch_current_user().await {
            Ok(user) => SessionState::authenticated(user),
            Err(_) => {
                self.client.tokens().clear();
                SessionState::anonymous()
            }
        }
    }

    /// Credential login: persist the returned pair, then fetch the profile.
    ///
    /// # Errors
    ///
    /// Propagates the backend's rejection message (e.g. "Invalid
    /// credentials") without persisting anything.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let pair = self.client.login(username, password).await?;
        self.client.tokens().store_pair(&pair.access, Some(&pair.refresh));
        self.client.fetch_current_user().await
    }

    /// Exchange an externally obtained Google access token for an internal
    /// session.
    pub async fn login_with_google(&self, provider_token: &str) -> GoogleLoginOutcome {
        match self.client.google_login(provider_token).await {
            Ok(resp) => {
                self.client.tokens().store_pair(&resp.access, resp.refresh.as_deref());
                GoogleLoginOutcome::Success { user: resp.user, created: resp.created }
            }
            Err(err) => GoogleLoginOutcome::Failed { message: err.to_string() },
        }
    }

    /// Create an account. Issues no tokens; the session stays anonymous until
    /// the user verifies their email and logs in.
    ///
    /// # Errors
    ///
    /// Propagates backend validation messages.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.client.register(username, email, password).await
    }

    /// # Errors
    ///
    /// Propagates an invalid/expired OTP as a user-visible message.
    pub async fn verify_email(&self, email: &str, otp: &str) -> Result<(), ApiError> {
        self.client.verify_email(email, otp).await
    }

    /// # Errors
    ///
    /// Propagates backend failures (e.g. throttling).
    pub async fn resend_otp(&self, email: &str) -> Result<(), ApiError> {
        self.client.resend_otp(email).await
    }

    /// Log out. The backend invalidation is best-effort; local tokens are
    /// cleared unconditionally and the returned state is always anonymous.
    pub async fn logout(&self) -> SessionState {
        let refresh = self.client.tokens().refresh_token();
        if let Err(err) = self.client.logout(refresh.as_deref()).await {
            log::warn!("logout invalidation failed: {err}");
        }
        self.client.tokens().clear();
        SessionState::anonymous()
    }
}
