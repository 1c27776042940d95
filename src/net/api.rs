//! Typed operations for each backend REST endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin wrappers over `ApiClient`: build the request, run it through the
//! authorized (or plain, for auth endpoints) path, map non-success statuses
//! to `ApiError::Status` carrying the backend's message, decode the body.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::client::{ApiClient, ApiError, ApiRequest, ApiResponse, Transport};
use crate::net::types::{
    BlogPost, CaptureResponse, DraftOrder, GoogleConfig, GoogleLoginResponse, LoginResponse,
    Order, Review, ServiceOffering, Subject, User,
};
use crate::util::storage::KeyValueStore;

pub const LOGIN_PATH: &str = "auth/login/";
pub const REGISTER_PATH: &str = "auth/register/";
pub const LOGOUT_PATH: &str = "auth/logout/";
pub const VERIFY_EMAIL_PATH: &str = "auth/verify-email/";
pub const RESEND_OTP_PATH: &str = "auth/resend-otp/";
pub const TOKEN_REFRESH_PATH: &str = "auth/token/refresh/";
pub const GOOGLE_CONFIG_PATH: &str = "auth/google/config/";
pub const GOOGLE_LOGIN_PATH: &str = "auth/google/";
pub const CURRENT_USER_PATH: &str = "users/me/";
pub const ORDERS_PATH: &str = "orders/";
pub const SUBJECTS_PATH: &str = "subjects/";
pub const SERVICES_PATH: &str = "services/";
pub const POSTS_PATH: &str = "blog/posts/";
pub const REVIEWS_PATH: &str = "reviews/";
pub const CAPTURE_PATH: &str = "payments/capture/";

pub fn post_detail_path(slug: &str) -> String {
    format!("{POSTS_PATH}{slug}/")
}

/// Body for the PayPal capture endpoint. `order_id` serializes as `null`
/// when the return URL carried none.
pub fn capture_payload(payment_id: &str, order_id: Option<&str>) -> serde_json::Value {
    serde_json::json!({ "order_id": order_id, "payment_id": payment_id })
}

fn expect_ok(resp: ApiResponse) -> Result<ApiResponse, ApiError> {
    if resp.ok() { Ok(resp) } else { Err(resp.into_status_error()) }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// Exchange credentials for a token pair. A 401 surfaces the backend's
    /// message (e.g. "Invalid credentials") rather than entering the
    /// refresh path.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::json!({ "username": username, "password": password });
        expect_ok(self.send_plain(ApiRequest::post(LOGIN_PATH, body)).await?)?.json()
    }

    /// Create an account. No tokens are issued; the caller routes the user
    /// to email verification.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let body =
            serde_json::json!({ "username": username, "email": email, "password": password });
        expect_ok(self.send_plain(ApiRequest::post(REGISTER_PATH, body)).await?).map(|_| ())
    }

    /// Invalidate the session server-side, presenting the refresh token for
    /// blacklisting when one is persisted.
    pub async fn logout(&self, refresh: Option<&str>) -> Result<(), ApiError> {
        let body = serde_json::json!({ "refresh": refresh });
        expect_ok(self.send_plain(ApiRequest::post(LOGOUT_PATH, body)).await?).map(|_| ())
    }

    pub async fn verify_email(&self, email: &str, otp: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "email": email, "otp": otp });
        expect_ok(self.send_plain(ApiRequest::post(VERIFY_EMAIL_PATH, body)).await?).map(|_| ())
    }

    pub async fn resend_otp(&self, email: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "email": email });
        expect_ok(self.send_plain(ApiRequest::post(RESEND_OTP_PATH, body)).await?).map(|_| ())
    }

    /// Discover the Google OAuth client id.
    pub async fn google_config(&self) -> Result<GoogleConfig, ApiError> {
        expect_ok(self.send_plain(ApiRequest::get(GOOGLE_CONFIG_PATH)).await?)?.json()
    }

    /// Exchange an externally obtained Google access token for an internal
    /// session.
    pub async fn google_login(
        &self,
        provider_token: &str,
    ) -> Result<GoogleLoginResponse, ApiError> {
        let body = serde_json::json!({ "access_token": provider_token });
        expect_ok(self.send_plain(ApiRequest::post(GOOGLE_LOGIN_PATH, body)).await?)?.json()
    }

    pub async fn fetch_current_user(&self) -> Result<User, ApiError> {
        expect_ok(self.send(ApiRequest::get(CURRENT_USER_PATH)).await?)?.json()
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        expect_ok(self.send(ApiRequest::get(ORDERS_PATH)).await?)?.json()
    }

    /// Place a new order; the response carries the PayPal approval URL when
    /// payment is due.
    pub async fn place_order(&self, draft: &DraftOrder) -> Result<Order, ApiError> {
        let body = serde_json::to_value(draft).map_err(|e| ApiError::Decode(e.to_string()))?;
        expect_ok(self.send(ApiRequest::post(ORDERS_PATH, body)).await?)?.json()
    }

    pub async fn list_subjects(&self) -> Result<Vec<Subject>, ApiError> {
        expect_ok(self.send_plain(ApiRequest::get(SUBJECTS_PATH)).await?)?.json()
    }

    pub async fn list_services(&self) -> Result<Vec<ServiceOffering>, ApiError> {
        expect_ok(self.send_plain(ApiRequest::get(SERVICES_PATH)).await?)?.json()
    }

    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        expect_ok(self.send_plain(ApiRequest::get(POSTS_PATH)).await?)?.json()
    }

    pub async fn fetch_post(&self, slug: &str) -> Result<BlogPost, ApiError> {
        expect_ok(self.send_plain(ApiRequest::get(post_detail_path(slug))).await?)?.json()
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        expect_ok(self.send_plain(ApiRequest::get(REVIEWS_PATH)).await?)?.json()
    }

    /// Post the PayPal return parameters to the capture endpoint.
    pub async fn capture_payment(
        &self,
        payment_id: &str,
        order_id: Option<&str>,
    ) -> Result<CaptureResponse, ApiError> {
        let body = capture_payload(payment_id, order_id);
        expect_ok(self.send(ApiRequest::post(CAPTURE_PATH, body)).await?)?.json()
    }
}
