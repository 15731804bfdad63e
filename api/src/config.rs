use std::env;
use std::path::PathBuf;

use crate::domain::entities::NotionId;
use crate::error::ConfigError;

/// Static description of the site the feed is published for
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub name: String,
    /// Absolute base URL without a trailing slash
    pub host: String,
    pub language: String,
    pub description: String,
    /// Page whose database holds the blog posts
    pub root_page_id: NotionId,
}

impl SiteConfig {
    pub fn feed_url(&self) -> String {
        format!("{}/feed.xml", self.host)
    }

    /// Public URL of a canonical page path
    pub fn page_url(&self, path: &str) -> String {
        format!("{}/{}", self.host, path.trim_start_matches('/'))
    }
}

/// Where the pre-built site map is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteMapSource {
    Url(String),
    Path(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub site: SiteConfig,
    pub site_map_source: SiteMapSource,
    /// Emit qualifying blog posts as feed items
    pub include_posts: bool,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build the config from a variable lookup; blank values count as unset
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let name = var("SITE_NAME").ok_or(ConfigError::Missing("SITE_NAME"))?;
        let host = parse_host(&var("SITE_HOST").ok_or(ConfigError::Missing("SITE_HOST"))?)?;
        let root_page_id = var("ROOT_NOTION_PAGE_ID")
            .ok_or(ConfigError::Missing("ROOT_NOTION_PAGE_ID"))
            .and_then(|raw| {
                NotionId::parse(&raw).map_err(|e| ConfigError::Invalid {
                    name: "ROOT_NOTION_PAGE_ID",
                    reason: e.to_string(),
                })
            })?;

        let site_map_source = match (var("SITE_MAP_URL"), var("SITE_MAP_PATH")) {
            (Some(url), _) => SiteMapSource::Url(url),
            (None, Some(path)) => SiteMapSource::Path(PathBuf::from(path)),
            (None, None) => return Err(ConfigError::Missing("SITE_MAP_URL or SITE_MAP_PATH")),
        };

        let include_posts = match var("FEED_INCLUDE_POSTS") {
            Some(raw) => parse_bool("FEED_INCLUDE_POSTS", &raw)?,
            None => true,
        };

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                reason: format!("'{}' is not a port number", raw),
            })?,
            None => 8080,
        };

        Ok(Self {
            site: SiteConfig {
                description: var("SITE_DESCRIPTION").unwrap_or_else(|| name.clone()),
                name,
                host,
                language: var("SITE_LANGUAGE").unwrap_or_else(|| "en".to_string()),
                root_page_id,
            },
            site_map_source,
            include_posts,
            port,
        })
    }
}

fn parse_host(raw: &str) -> Result<String, ConfigError> {
    let url = reqwest::Url::parse(raw).map_err(|e| ConfigError::Invalid {
        name: "SITE_HOST",
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::Invalid {
            name: "SITE_HOST",
            reason: format!("'{}' is not a base URL", raw),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            reason: format!("'{}' is not a boolean", raw),
        }),
    }
}
