//! Error types for Bookshelf server

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::api::session::{flash_redirect, Flash};
use crate::api::views;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Catalog error: {0}")]
    Remote(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => flash_redirect("/signup", Flash::error(msg)),
            AppError::Conflict(msg) => flash_redirect("/login", Flash::error(msg)),
            AppError::UnknownAccount(msg) => flash_redirect("/signup", Flash::error(msg)),
            AppError::Authentication(msg) => flash_redirect("/login", Flash::error(msg)),
            AppError::NotFound(msg) => flash_redirect("/", Flash::error(msg)),
            AppError::Remote(msg) => flash_redirect("/", Flash::error(msg)),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                flash_redirect(
                    "/",
                    Flash::error("Something went wrong. Please try again.".to_string()),
                )
            }
            AppError::Http(e) => {
                tracing::error!("Catalog request failed: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::error_page()),
                )
                    .into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::error_page()),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
