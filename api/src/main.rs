//! Blog Feed API Server
//!
//! Publishes the RSS feed of a Notion-backed blog from a site map that is
//! built elsewhere. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::ConfiguredSiteMapProvider;
use app::FeedService;
use config::{Config, SiteMapSource};
use domain::ports::SiteMapProvider;

/// Application state shared across all handlers
pub struct AppState<SP>
where
    SP: SiteMapProvider,
{
    pub feed_service: Arc<FeedService<SP>>,
}

impl<SP> Clone for AppState<SP>
where
    SP: SiteMapProvider,
{
    fn clone(&self) -> Self {
        Self {
            feed_service: Arc::clone(&self.feed_service),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
pub fn build_router<SP>(state: AppState<SP>) -> Router
where
    SP: SiteMapProvider + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // RSS feed (method guard lives in the handler)
        .route("/feed.xml", any(handlers::get_feed_xml::<SP>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blog_feed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting blog feed API...");

    // Load configuration
    let config = Config::from_env()?;
    match &config.site_map_source {
        SiteMapSource::Url(url) => tracing::info!("Site map source: {}", url),
        SiteMapSource::Path(path) => tracing::info!("Site map source: {}", path.display()),
    }
    if !config.include_posts {
        tracing::warn!("FEED_INCLUDE_POSTS is off; the feed will carry no items");
    }

    // Create adapters and services
    let site_maps = Arc::new(ConfiguredSiteMapProvider::from_source(
        &config.site_map_source,
    ));
    let feed_service = Arc::new(FeedService::new(
        site_maps,
        config.site.clone(),
        config.include_posts,
    ));

    let app = build_router(AppState { feed_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
