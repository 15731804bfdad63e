//! Site map provider port
//!
//! The site map is computed by a separate build step. The feed only reads
//! it, and fetches a fresh copy on every request.

use async_trait::async_trait;

use crate::domain::entities::SiteMap;
use crate::error::SiteMapError;

/// Source of the current site map
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteMapProvider: Send + Sync {
    /// Fetch the current site map
    async fn get_site_map(&self) -> Result<SiteMap, SiteMapError>;
}
