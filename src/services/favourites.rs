//! Favourites management service

use crate::{
    error::{AppError, AppResult},
    models::{
        favourite::{Favourite, NewFavourite},
        volume::VolumeDetails,
    },
    repository::Repository,
};

/// Flatten an author list to the stored `", "`-delimited form.
/// Empty lists are stored as NULL.
pub fn join_authors(authors: &[String]) -> Option<String> {
    if authors.is_empty() {
        None
    } else {
        Some(authors.join(", "))
    }
}

#[derive(Clone)]
pub struct FavouritesService {
    repository: Repository,
}

impl FavouritesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Save a catalog volume as a favourite of the given user
    pub async fn add(&self, user_id: i32, details: &VolumeDetails) -> AppResult<Favourite> {
        // A catalog record without a title cannot be listed back meaningfully
        let title = details
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::Remote("Error retrieving data from Google Books API".to_string())
            })?;

        let favourite = NewFavourite {
            user_id,
            title: title.to_string(),
            subtitle: details.subtitle.clone(),
            description: details.description.clone(),
            authors: join_authors(&details.authors),
        };

        let created = self.repository.favourites.create(&favourite).await?;
        tracing::info!("Favourite saved for user {}: {}", user_id, created.title);

        Ok(created)
    }

    /// List the user's favourites in the order they were saved
    pub async fn list_for(&self, user_id: i32) -> AppResult<Vec<Favourite>> {
        self.repository.favourites.list_for_user(user_id).await
    }
}
