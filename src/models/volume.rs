//! Google Books volume models

use serde::{Deserialize, Serialize};

/// Wire format of a `GET /volumes?q=...` search response
#[derive(Debug, Clone, Deserialize)]
pub struct VolumesResponse {
    /// Absent from the body when the search matched nothing
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// Wire format of a single volume record
#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    pub id: String,
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub description: Option<String>,
}

/// List entry rendered on the search results page
#[derive(Debug, Clone, Serialize)]
pub struct VolumeSummary {
    pub id: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
}

impl From<Volume> for VolumeSummary {
    fn from(volume: Volume) -> Self {
        Self {
            id: volume.id,
            title: volume.volume_info.title,
            authors: volume.volume_info.authors,
        }
    }
}

/// Detail view of a volume, and the payload saved as a favourite
#[derive(Debug, Clone, Serialize)]
pub struct VolumeDetails {
    pub id: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub authors: Vec<String>,
    pub description: Option<String>,
}

impl From<Volume> for VolumeDetails {
    fn from(volume: Volume) -> Self {
        Self {
            id: volume.id,
            title: volume.volume_info.title,
            subtitle: volume.volume_info.subtitle,
            authors: volume.volume_info.authors,
            description: volume.volume_info.description,
        }
    }
}
