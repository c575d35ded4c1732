//! Web handlers for the Bookshelf pages

pub mod auth;
pub mod favourites;
pub mod health;
pub mod search;
pub mod session;
pub mod views;
pub mod volumes;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    routing::get,
    Router,
};
use axum_extra::extract::cookie::Key;
use axum_extra::extract::SignedCookieJar;
use tower_http::trace::TraceLayer;

use crate::{error::AppError, models::user::SessionClaims, AppState};

/// Extractor for the logged-in user's session claims.
///
/// A missing, tampered or expired session cookie rejects the request;
/// the error responder turns that into a flash and a redirect to the
/// login page. Use `Option<CurrentUser>` for pages that only vary by
/// login state.
pub struct CurrentUser(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, Key::from_ref(state));

        jar.get(session::SESSION_COOKIE)
            .and_then(|cookie| SessionClaims::decode(cookie.value()))
            .map(CurrentUser)
            .ok_or_else(|| {
                AppError::Authentication("Please log in to access this page.".to_string())
            })
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(search::home).post(search::home_search))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/search", get(search::search_page).post(search::search))
        .route("/receive/:id", get(volumes::show).post(volumes::save))
        .route("/favourite", get(favourites::list))
        // Operational endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
