//! Home page and catalog search handlers

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{error::AppResult, AppState};

use super::{
    session::{self, Flash},
    views, CurrentUser,
};

/// Search form payload, shared by the home page and `/search`
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

/// Home page with the search box
pub async fn home(user: Option<CurrentUser>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, flash) = session::take_flash(jar);
    let claims = user.map(|u| u.0);
    (jar, Html(views::home_page(claims.as_ref(), flash.as_ref())))
}

/// Search submitted from the home page.
///
/// Anonymous submissions are turned away before any catalog request
/// goes out.
pub async fn home_search(
    State(state): State<AppState>,
    user: Option<CurrentUser>,
    Form(form): Form<SearchForm>,
) -> AppResult<Response> {
    let Some(CurrentUser(claims)) = user else {
        return Ok(session::flash_redirect(
            "/",
            Flash::info("Login to be able to use this function"),
        ));
    };

    let volumes = state.services.catalog.search(&form.query).await?;
    Ok(Html(views::results_page(Some(&claims), &volumes)).into_response())
}

/// Dedicated search page
pub async fn search_page(
    CurrentUser(claims): CurrentUser,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let (jar, flash) = session::take_flash(jar);
    (jar, Html(views::search_page(&claims, flash.as_ref())))
}

/// Run a catalog search and render the results
pub async fn search(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let volumes = state.services.catalog.search(&form.query).await?;
    Ok(Html(views::results_page(Some(&claims), &volumes)))
}
