//! Business logic services

pub mod catalog;
pub mod favourites;
pub mod users;

use crate::{config::CatalogConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub catalog: catalog::CatalogService,
    pub favourites: favourites::FavouritesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, catalog_config: CatalogConfig) -> AppResult<Self> {
        Ok(Self {
            users: users::UsersService::new(repository.clone()),
            catalog: catalog::CatalogService::new(catalog_config)?,
            favourites: favourites::FavouritesService::new(repository),
        })
    }
}
