//! Mock implementations of port traits
//!
//! In-memory implementations that return canned data.

use async_trait::async_trait;

use crate::domain::entities::SiteMap;
use crate::domain::ports::SiteMapProvider;
use crate::error::SiteMapError;

// ============================================================================
// In-Memory Site Map Provider
// ============================================================================

#[derive(Default)]
pub struct InMemorySiteMapProvider {
    site_map: SiteMap,
}

impl InMemorySiteMapProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve this site map on every call
    pub fn with_site_map(mut self, site_map: SiteMap) -> Self {
        self.site_map = site_map;
        self
    }
}

#[async_trait]
impl SiteMapProvider for InMemorySiteMapProvider {
    async fn get_site_map(&self) -> Result<SiteMap, SiteMapError> {
        Ok(self.site_map.clone())
    }
}

// ============================================================================
// Failing Site Map Provider
// ============================================================================

/// Provider whose upstream is always down
pub struct FailingSiteMapProvider;

#[async_trait]
impl SiteMapProvider for FailingSiteMapProvider {
    async fn get_site_map(&self) -> Result<SiteMap, SiteMapError> {
        Err(SiteMapError::Api {
            status: 503,
            message: "site map builder unavailable".to_string(),
        })
    }
}
