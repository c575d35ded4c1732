//! Remote book catalog service (Google Books volumes API)

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::volume::{Volume, VolumeDetails, VolumeSummary, VolumesResponse},
};

/// Field mask requested on searches; keeps result payloads small
const SEARCH_FIELDS: &str = "items(id,volumeInfo(title,authors))";

#[derive(Clone)]
pub struct CatalogService {
    client: Client,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(config: CatalogConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }

    /// Search the catalog by free-text query
    pub async fn search(&self, query: &str) -> AppResult<Vec<VolumeSummary>> {
        let url = format!("{}/volumes", self.config.base_url);

        let mut params: Vec<(&str, &str)> = vec![("q", query), ("fields", SEARCH_FIELDS)];
        if !self.config.api_key.is_empty() {
            params.push(("key", self.config.api_key.as_str()));
        }

        tracing::debug!("Catalog search: {}", query);

        let response = self.client.get(&url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Catalog search returned {}", status);
            return Err(AppError::Remote(
                "Error retrieving data from Google Books API".to_string(),
            ));
        }

        let body: VolumesResponse = response.json().await?;
        tracing::debug!("Catalog search found {} volumes", body.items.len());

        Ok(body.items.into_iter().map(VolumeSummary::from).collect())
    }

    /// Fetch full details for a single volume
    pub async fn fetch_details(&self, volume_id: &str) -> AppResult<VolumeDetails> {
        let url = format!("{}/volumes/{}", self.config.base_url, volume_id);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(
                "Book not found in the catalog".to_string(),
            ));
        }
        if !status.is_success() {
            tracing::warn!("Catalog lookup for {} returned {}", volume_id, status);
            return Err(AppError::Remote(
                "Error retrieving data from Google Books API".to_string(),
            ));
        }

        let volume: Volume = response.json().await?;
        Ok(VolumeDetails::from(volume))
    }
}
