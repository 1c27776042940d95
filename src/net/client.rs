//! Authenticated HTTP client with transparent access-token refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call flows through `ApiClient::send`, which attaches the
//! persisted access token as a bearer credential and, on a 401, performs at
//! most one refresh against `auth/token/refresh/` before retrying the
//! original request once. An unrecoverable refresh clears both tokens and
//! hands control to the injected session-expired hook (browser: a full
//! navigation to `/login`).
//!
//! Concurrent 401s serialize behind an async mutex: a caller that wins the
//! lock after another caller already rotated the access token skips its own
//! refresh and retries directly.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side (SSR): the
//! transport returns `ApiError::Unavailable` since these endpoints are only
//! meaningful in the browser.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use futures::lock::Mutex;
use serde::de::DeserializeOwned;

use crate::net::api::TOKEN_REFRESH_PATH;
use crate::net::types::{ApiErrorBody, RefreshResponse};
use crate::util::storage::{KeyValueStore, TokenStore};

const UNAUTHORIZED: u16 = 401;

/// HTTP method subset the backend API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An outbound request against the backend, path relative to the API base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }
}

/// A backend response: status plus raw JSON body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body does not match the schema.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The user-displayable message for a failed response, read from the
    /// backend's error body when present.
    pub fn error_message(&self) -> String {
        serde_json::from_str::<ApiErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.message().map(str::to_owned))
            .unwrap_or_else(|| format!("request failed: {}", self.status))
    }

    /// Convert a failed response into its error form.
    pub fn into_status_error(self) -> ApiError {
        ApiError::Status { status: self.status, message: self.error_message() }
    }
}

/// Network-layer errors. Clone so concurrent awaiters can share one outcome.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Pluggable request executor so the token-lifecycle logic can be driven by
/// an in-memory fake in tests.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(
        &self,
        req: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, ApiError>;
}

/// Browser transport backed by `gloo-net`, joining relative paths to the
/// configured base URL.
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base: String,
}

impl GlooTransport {
    pub fn new() -> Self {
        Self::with_base("/api/")
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for GlooTransport {
    async fn execute(
        &self,
        req: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&req.path);
            let builder = match req.method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
            };
            let builder = match bearer {
                Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
                None => builder,
            };
            let sent = match &req.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (req, bearer);
            Err(ApiError::Unavailable)
        }
    }
}

/// Authenticated API client owning the token lifecycle.
pub struct ApiClient<T, S> {
    transport: T,
    tokens: TokenStore<S>,
    refresh_gate: Rc<Mutex<()>>,
    on_session_expired: Rc<dyn Fn()>,
}

impl<T: Clone, S: Clone> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            tokens: self.tokens.clone(),
            refresh_gate: Rc::clone(&self.refresh_gate),
            on_session_expired: Rc::clone(&self.on_session_expired),
        }
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, tokens: TokenStore<S>, on_session_expired: Rc<dyn Fn()>) -> Self {
        Self { transport, tokens, refresh_gate: Rc::new(Mutex::new(())), on_session_expired }
    }

    pub fn tokens(&self) -> &TokenStore<S> {
        &self.tokens
    }

    /// Execute a request with the persisted access token attached, recovering
    /// from a 401 with at most one refresh-and-retry.
    ///
    /// A 401 with no persisted refresh token is returned unchanged for the
    /// caller to inspect.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and refresh failures; a failed refresh
    /// also clears both tokens and fires the session-expired hook.
    pub async fn send(&self, req: ApiRequest) -> Result<ApiResponse, ApiError> {
        let access = self.tokens.access_token();
        let resp = self.transport.execute(&req, access.as_deref()).await?;
        if resp.status != UNAUTHORIZED {
            return Ok(resp);
        }
        let Some(refresh) = self.tokens.refresh_token() else {
            return Ok(resp);
        };
        self.refresh_access(access.as_deref(), &refresh).await?;
        let renewed = self.tokens.access_token();
        self.transport.execute(&req, renewed.as_deref()).await
    }

    /// Execute a request without credentials and without the refresh path.
    /// Used for the auth endpoints themselves, where a 401 means bad input
    /// rather than an expired session.
    ///
    /// # Errors
    ///
    /// Propagates transport failures.
    pub async fn send_plain(&self, req: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.transport.execute(&req, None).await
    }

    async fn refresh_access(
        &self,
        stale_access: Option<&str>,
        refresh: &str,
    ) -> Result<(), ApiError> {
        let _gate = self.refresh_gate.lock().await;
        if self.tokens.access_token().as_deref() != stale_access {
            // Another in-flight request already refreshed while we waited.
            return Ok(());
        }
        let req = ApiRequest::post(TOKEN_REFRESH_PATH, serde_json::json!({ "refresh": refresh }));
        match self.transport.execute(&req, None).await {
            Ok(resp) if resp.ok() => match resp.json::<RefreshResponse>() {
                Ok(pair) => {
                    self.tokens.store_pair(&pair.access, pair.refresh.as_deref());
                    Ok(())
                }
                Err(err) => {
                    self.expire_session();
                    Err(err)
                }
            },
            Ok(resp) => {
                self.expire_session();
                Err(resp.into_status_error())
            }
            Err(err) => {
                self.expire_session();
                Err(err)
            }
        }
    }

    fn expire_session(&self) {
        self.tokens.clear();
        (self.on_session_expired)();
    }
}
