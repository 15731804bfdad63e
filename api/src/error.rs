//! Unified error types for the blog feed API
//!
//! This module defines error types for each layer:
//! - `SiteMapError`: Site map provider errors
//! - `FeedError`: RSS serialization errors
//! - `ConfigError`: Startup configuration errors
//! - `AppError`: Application layer errors (mapped to HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Site map provider errors
#[derive(Debug, Error)]
pub enum SiteMapError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Site map service error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Failed to read site map: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// RSS serialization errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("RSS validation failed: {0}")]
    Validation(String),

    #[error("Failed to write RSS: {0}")]
    Write(#[from] rss::Error),

    #[error("RSS output is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Configuration errors, raised once at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("Site map unavailable: {0}")]
    SiteMap(#[from] SiteMapError),

    #[error("Feed serialization failed: {0}")]
    Feed(#[from] FeedError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            AppError::SiteMap(e) => {
                tracing::error!("Site map error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Feed(e) => {
                tracing::error!("Feed error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn method_not_allowed_has_fixed_body() {
        let response = AppError::MethodNotAllowed.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "method not allowed" })
        );
    }

    #[tokio::test]
    async fn site_map_error_is_internal_and_hides_cause() {
        let response = AppError::from(SiteMapError::Api {
            status: 503,
            message: "secret upstream detail".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn feed_error_is_internal() {
        let response =
            AppError::from(FeedError::Validation("bad link".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::Missing("SITE_NAME").to_string(),
            "SITE_NAME must be set"
        );
        assert_eq!(
            ConfigError::Invalid {
                name: "PORT",
                reason: "not a number".to_string()
            }
            .to_string(),
            "PORT is invalid: not a number"
        );
    }
}
