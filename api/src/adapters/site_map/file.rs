//! Site map on the local filesystem

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::SiteMap;
use crate::domain::ports::SiteMapProvider;
use crate::error::SiteMapError;

/// Reads the site map JSON the site builder wrote to disk.
///
/// The file is re-read on every call so a rebuilt site map is picked up
/// without restarting the service.
pub struct FileSiteMapProvider {
    path: PathBuf,
}

impl FileSiteMapProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SiteMapProvider for FileSiteMapProvider {
    async fn get_site_map(&self) -> Result<SiteMap, SiteMapError> {
        tracing::debug!("Reading site map from {}", self.path.display());

        let bytes = tokio::fs::read(&self.path).await?;
        serde_json::from_slice(&bytes).map_err(|e| SiteMapError::Deserialization(e.to_string()))
    }
}
