//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON schema field-for-field so serde
//! round-trips stay lossless. Numeric fields the backend serializes loosely
//! (counts, ratings) go through a lenient deserializer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `users/me/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Login / display name.
    pub username: String,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
    /// Whether the account belongs to staff.
    #[serde(default)]
    pub is_staff: bool,
    /// Whether the email address has been verified.
    #[serde(default)]
    pub is_verified: bool,
}

/// Token pair issued by `auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

/// Response of `auth/token/refresh/`. The refresh token is only present when
/// the server rotates it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Google OAuth discovery payload from `auth/google/config/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GoogleConfig {
    pub client_id: String,
}

/// Response of the `auth/google/` token-exchange endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GoogleLoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    pub user: User,
    /// True when the exchange created a new account.
    #[serde(default)]
    pub created: bool,
}

/// A customer order as returned by `orders/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub topic: String,
    pub subject: String,
    /// Backend status string (e.g. `"pending_payment"`, `"in_progress"`).
    pub status: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub pages: i64,
    /// ISO 8601 deadline.
    pub deadline: String,
    /// Decimal price serialized as a string by the backend.
    pub price: String,
    /// PayPal approval URL for orders awaiting payment.
    #[serde(default)]
    pub approval_url: Option<String>,
}

/// Outbound payload for placing a new order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DraftOrder {
    pub topic: String,
    pub subject_id: String,
    pub academic_level: String,
    pub pages: i64,
    /// ISO 8601 deadline.
    pub deadline: String,
    pub instructions: String,
}

/// An academic subject offered in the order form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
}

/// A catalog entry from `services/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Starting price per page, serialized as a decimal string.
    pub price_from: String,
}

/// A blog post from `blog/posts/`. The body is Markdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: String,
    /// ISO 8601 publication date, absent for drafts.
    #[serde(default)]
    pub published: Option<String>,
}

/// A customer testimonial from `reviews/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    /// Star rating, 1 through 5.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub rating: i64,
    pub body: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Response of the `payments/capture/` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CaptureResponse {
    /// Capture status string (e.g. `"COMPLETED"`).
    pub status: String,
    #[serde(default)]
    pub order_id: Option<String>,
}

/// Error body shapes the backend uses (`{"error": ...}` or `{"detail": ...}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// The user-displayable message, preferring `error` over `detail`.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().or(self.detail.as_deref())
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
