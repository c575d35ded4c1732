//! Signup, login and logout handlers

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::{cookie::CookieJar, SignedCookieJar};

use crate::{
    error::AppResult,
    models::user::{LoginForm, SessionClaims, SignupForm},
    AppState,
};

use super::{session, views};

/// Render the signup form
pub async fn signup_page(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, flash) = session::take_flash(jar);
    (jar, Html(views::signup_page(flash.as_ref())))
}

/// Create a new account.
///
/// Success goes back to the home page without establishing a session;
/// the user logs in with the credentials they just chose.
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> AppResult<Redirect> {
    state.services.users.register(&form).await?;
    Ok(Redirect::to("/"))
}

/// Render the login form
pub async fn login_page(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, flash) = session::take_flash(jar);
    (jar, Html(views::login_page(flash.as_ref())))
}

/// Authenticate and establish the session cookie
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<(SignedCookieJar, Redirect)> {
    let user = state
        .services
        .users
        .authenticate(&form.email, &form.password)
        .await?;

    let claims = SessionClaims::for_user(&user, state.config.session.ttl_hours);
    let cookie = session::session_cookie(&claims, state.config.session.ttl_hours)?;

    tracing::info!("User logged in: {}", user.email);

    Ok((jar.add(cookie), Redirect::to("/")))
}

/// Drop the session cookie and go home
pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    (
        jar.remove(session::session_removal_cookie()),
        Redirect::to("/"),
    )
}
