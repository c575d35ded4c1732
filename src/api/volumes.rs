//! Volume detail and save-favourite handlers

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{error::AppResult, AppState};

use super::{session, views, CurrentUser};

/// Volume details page with a save form
pub async fn show(
    State(state): State<AppState>,
    user: Option<CurrentUser>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> AppResult<(CookieJar, Html<String>)> {
    let details = state.services.catalog.fetch_details(&id).await?;

    let (jar, flash) = session::take_flash(jar);
    let claims = user.map(|u| u.0);
    Ok((
        jar,
        Html(views::volume_page(claims.as_ref(), &details, flash.as_ref())),
    ))
}

/// Save the volume as a favourite of the logged-in user.
///
/// Details are fetched again rather than trusted from the form, so the
/// stored record always reflects the catalog.
pub async fn save(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    let details = state.services.catalog.fetch_details(&id).await?;
    state
        .services
        .favourites
        .add(claims.user_id, &details)
        .await?;

    Ok(Redirect::to("/"))
}
