//! Favourites listing handler

use axum::{extract::State, response::Html};
use axum_extra::extract::cookie::CookieJar;

use crate::{error::AppResult, AppState};

use super::{session, views, CurrentUser};

/// List the logged-in user's saved books
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let favourites = state.services.favourites.list_for(claims.user_id).await?;

    let (jar, flash) = session::take_flash(jar);
    Ok((
        jar,
        Html(views::favourites_page(&claims, &favourites, flash.as_ref())),
    ))
}
