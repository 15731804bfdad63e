//! Feed handlers
//!
//! Serves the blog's RSS feed. The route accepts every method so that
//! anything other than GET gets the JSON error instead of an empty 405.

use axum::{
    extract::State,
    http::{header, Method},
    response::{IntoResponse, Response},
};

use crate::domain::ports::SiteMapProvider;
use crate::error::AppError;
use crate::feed::render_rss;
use crate::AppState;

/// GET /feed.xml
///
/// Returns the RSS feed with a day-long shared cache lifetime.
pub async fn get_feed_xml<SP>(
    State(state): State<AppState<SP>>,
    method: Method,
) -> Result<Response, AppError>
where
    SP: SiteMapProvider + 'static,
{
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }

    let feed = state.feed_service.generate_feed().await?;
    let xml = render_rss(&feed)?;

    Ok((
        [
            (header::CACHE_CONTROL, cache_control(feed.ttl_seconds())),
            (
                header::CONTENT_TYPE,
                "text/xml; charset=utf-8".to_string(),
            ),
        ],
        xml,
    )
        .into_response())
}

fn cache_control(ttl_seconds: u32) -> String {
    format!(
        "public, max-age={}, stale-while-revalidate={}",
        ttl_seconds, ttl_seconds
    )
}
