//! Favourite model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full favourite model matching the `favourites` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favourite {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    /// Author names flattened to a `", "`-delimited string
    pub authors: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new favourite
#[derive(Debug, Clone)]
pub struct NewFavourite {
    pub user_id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub authors: Option<String>,
}
