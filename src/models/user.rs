//! User model and related types

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full user model matching the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Display name used in the navigation bar and session claims
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Signup form payload
///
/// Fields default to empty strings so a form submission with missing
/// inputs still deserializes and hits the blank-field validation.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address!"))]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Login form payload
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Claims carried inside the signed session cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account email
    pub sub: String,
    pub user_id: i32,
    /// Display name shown in the navigation bar
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims for a freshly authenticated user
    pub fn for_user(user: &User, ttl_hours: u64) -> Self {
        let now = Utc::now();
        Self {
            sub: user.email.clone(),
            user_id: user.id,
            name: user.display_name(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(ttl_hours as i64)).timestamp(),
        }
    }

    /// Serialize the claims into a cookie-safe value.
    ///
    /// Integrity comes from the signed cookie jar, not from this encoding.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;
        Ok(BASE64.encode(json))
    }

    /// Parse a cookie value back into claims.
    ///
    /// Returns `None` for malformed or expired values; callers treat
    /// both the same way as a missing cookie.
    pub fn decode(value: &str) -> Option<Self> {
        let bytes = BASE64.decode(value).ok()?;
        let claims: Self = serde_json::from_slice(&bytes).ok()?;
        if claims.is_expired() {
            return None;
        }
        Some(claims)
    }

    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }
}
