//! Site map provider adapters
//!
//! The site map is either served by the site builder over HTTP or written
//! to disk next to this service. Which one is used is decided at startup.

mod file;
mod http;

pub use file::FileSiteMapProvider;
pub use http::HttpSiteMapProvider;

use async_trait::async_trait;

use crate::config::SiteMapSource;
use crate::domain::entities::SiteMap;
use crate::domain::ports::SiteMapProvider;
use crate::error::SiteMapError;

/// Site map provider selected by configuration
pub enum ConfiguredSiteMapProvider {
    Http(HttpSiteMapProvider),
    File(FileSiteMapProvider),
}

impl ConfiguredSiteMapProvider {
    pub fn from_source(source: &SiteMapSource) -> Self {
        match source {
            SiteMapSource::Url(url) => Self::Http(HttpSiteMapProvider::new(url.clone())),
            SiteMapSource::Path(path) => Self::File(FileSiteMapProvider::new(path.clone())),
        }
    }
}

#[async_trait]
impl SiteMapProvider for ConfiguredSiteMapProvider {
    async fn get_site_map(&self) -> Result<SiteMap, SiteMapError> {
        match self {
            Self::Http(provider) => provider.get_site_map().await,
            Self::File(provider) => provider.get_site_map().await,
        }
    }
}
