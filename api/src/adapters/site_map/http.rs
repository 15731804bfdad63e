//! Site map over HTTP

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::entities::SiteMap;
use crate::domain::ports::SiteMapProvider;
use crate::error::SiteMapError;

/// Fetches the site map JSON from the site builder
pub struct HttpSiteMapProvider {
    http: Client,
    url: String,
}

impl HttpSiteMapProvider {
    pub fn new(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<SiteMap, SiteMapError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| SiteMapError::Deserialization(e.to_string()))
        } else if status.as_u16() == 429 {
            Err(SiteMapError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(SiteMapError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl SiteMapProvider for HttpSiteMapProvider {
    async fn get_site_map(&self) -> Result<SiteMap, SiteMapError> {
        tracing::debug!("Fetching site map from {}", self.url);

        let response = self.http.get(&self.url).send().await?;
        self.handle_response(response).await
    }
}
