//! Feed service
//!
//! Turns the current site map into a blog feed: every canonical page whose
//! own block is a row of a database sitting on the root page is a post.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::domain::entities::{Block, CanonicalPage};
use crate::domain::ports::SiteMapProvider;
use crate::error::AppError;

/// How long feed readers may cache the feed (24 hours)
pub const FEED_TTL_MINUTES: u32 = 24 * 60;

/// Channel-level feed data plus its posts, ready for rendering
#[derive(Debug, Clone)]
pub struct BlogFeed {
    pub title: String,
    pub site_url: String,
    pub feed_url: String,
    pub description: String,
    pub language: String,
    pub ttl_minutes: u32,
    pub posts: Vec<FeedPost>,
}

impl BlogFeed {
    pub fn ttl_seconds(&self) -> u32 {
        self.ttl_minutes * 60
    }
}

/// A blog post in the feed
#[derive(Debug, Clone)]
pub struct FeedPost {
    pub title: String,
    pub url: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// Service for generating the blog feed
pub struct FeedService<SP>
where
    SP: SiteMapProvider,
{
    site_maps: Arc<SP>,
    site: SiteConfig,
    include_posts: bool,
}

impl<SP> FeedService<SP>
where
    SP: SiteMapProvider,
{
    /// With `include_posts` off the feed carries channel metadata only
    pub fn new(site_maps: Arc<SP>, site: SiteConfig, include_posts: bool) -> Self {
        Self {
            site_maps,
            site,
            include_posts,
        }
    }

    /// Fetch the site map and collect the blog posts under the root page
    pub async fn generate_feed(&self) -> Result<BlogFeed, AppError> {
        let site_map = self.site_maps.get_site_map().await?;

        let mut posts = Vec::new();
        let mut seen = HashSet::new();
        let mut qualifying = 0usize;
        let mut unavailable = 0usize;

        for page in &site_map.canonical_page_map {
            let Some(record_map) = site_map.record_map(&page.page_id) else {
                unavailable += 1;
                continue;
            };
            let Some(block) = record_map.root_block(&page.page_id) else {
                continue;
            };
            if !record_map.is_blog_post(block, &self.site.root_page_id) {
                continue;
            }

            qualifying += 1;
            // Aliased paths point at the same page; the first path wins
            if self.include_posts && seen.insert(block.id) {
                posts.push(self.block_to_feed_post(page, block));
            }
        }

        tracing::debug!(
            pages = site_map.canonical_page_map.len(),
            unavailable,
            qualifying,
            emitted = posts.len(),
            "Generated blog feed"
        );

        Ok(BlogFeed {
            title: self.site.name.clone(),
            site_url: self.site.host.clone(),
            feed_url: self.site.feed_url(),
            description: self.site.description.clone(),
            language: self.site.language.clone(),
            ttl_minutes: FEED_TTL_MINUTES,
            posts,
        })
    }

    fn block_to_feed_post(&self, page: &CanonicalPage, block: &Block) -> FeedPost {
        FeedPost {
            title: block.title().unwrap_or_else(|| "Untitled".to_string()),
            url: self.site.page_url(&page.path),
            published_at: block.created_at(),
        }
    }
}
