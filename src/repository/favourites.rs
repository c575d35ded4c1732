//! Favourites repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::favourite::{Favourite, NewFavourite},
};

#[derive(Clone)]
pub struct FavouritesRepository {
    pool: Pool<Postgres>,
}

impl FavouritesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new favourite for a user
    pub async fn create(&self, favourite: &NewFavourite) -> AppResult<Favourite> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Favourite>(
            r#"
            INSERT INTO favourites (user_id, title, subtitle, description, authors)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(favourite.user_id)
        .bind(&favourite.title)
        .bind(&favourite.subtitle)
        .bind(&favourite.description)
        .bind(&favourite.authors)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    /// List a user's favourites in insertion order
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Favourite>> {
        let favourites = sqlx::query_as::<_, Favourite>(
            r#"
            SELECT * FROM favourites WHERE user_id = $1 ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favourites)
    }
}
