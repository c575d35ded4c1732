//! Session and flash message cookies

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, Key, SameSite};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{
    error::{AppError, AppResult},
    models::user::SessionClaims,
};

/// Name of the signed login-session cookie
pub const SESSION_COOKIE: &str = "session";
/// Name of the unsigned one-shot notification cookie
pub const FLASH_COOKIE: &str = "flash";

/// Derive the cookie signing key from the configured secret.
///
/// `Key::derive_from` panics below 32 bytes of material; startup
/// rejects shorter secrets before this runs.
pub fn signing_key(secret: &str) -> Key {
    Key::derive_from(secret.as_bytes())
}

/// Build the session cookie for freshly issued claims
pub fn session_cookie(claims: &SessionClaims, ttl_hours: u64) -> AppResult<Cookie<'static>> {
    let value = claims
        .encode()
        .map_err(|e| AppError::Internal(format!("Failed to encode session: {}", e)))?;

    Ok(Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(ttl_hours as i64))
        .into())
}

/// Cookie that clears the session on logout
pub fn session_removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").into()
}

/// One-shot notification displayed by the next rendered page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub level: String,
    pub message: String,
}

impl Flash {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: "error".to_string(),
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: "info".to_string(),
            message: message.into(),
        }
    }

    /// Encode into the flash cookie. Display-only, so it is not signed.
    pub fn into_cookie(self) -> Cookie<'static> {
        let value = serde_json::to_vec(&self)
            .map(|json| BASE64.encode(json))
            .unwrap_or_default();

        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .into()
    }

    fn decode(value: &str) -> Option<Self> {
        let bytes = BASE64.decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// Pull the pending flash message out of the jar, clearing its cookie
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    match jar.get(FLASH_COOKIE).map(|cookie| cookie.value().to_string()) {
        Some(value) => {
            let jar = jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/"));
            (jar, Flash::decode(&value))
        }
        None => (jar, None),
    }
}

/// Flash a message and send the browser to `target` with a 303
pub fn flash_redirect(target: &str, flash: Flash) -> Response {
    (
        StatusCode::SEE_OTHER,
        [
            (header::SET_COOKIE, flash.into_cookie().to_string()),
            (header::LOCATION, target.to_string()),
        ],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_session_cookie_attributes() {
        let claims = SessionClaims {
            sub: "ada@example.org".to_string(),
            user_id: 1,
            name: "Ada Lovelace".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };
        let cookie = session_cookie(&claims, 24).unwrap();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::hours(24)));
    }

    #[test]
    fn test_flash_cookie_round_trip() {
        let flash = Flash::error("Passwords do not match!");
        let cookie = flash.clone().into_cookie();
        let decoded = Flash::decode(cookie.value()).unwrap();
        assert_eq!(decoded, flash);
    }

    #[test]
    fn test_flash_decode_rejects_garbage() {
        assert!(Flash::decode("%%%not-base64%%%").is_none());
        assert!(Flash::decode(&BASE64.encode(b"[1,2,3]")).is_none());
    }

    #[test]
    fn test_take_flash_clears_cookie() {
        let jar = CookieJar::new().add(Flash::info("Saved").into_cookie());
        let (jar, flash) = take_flash(jar);
        assert_eq!(flash.unwrap().message, "Saved");
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn test_take_flash_without_cookie() {
        let (_, flash) = take_flash(CookieJar::new());
        assert!(flash.is_none());
    }

    #[test]
    fn test_flash_redirect_sets_location_and_cookie() {
        let response = flash_redirect("/login", Flash::error("Invalid email or password"));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
        let set_cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert!(set_cookie.to_str().unwrap().starts_with("flash="));
    }
}
