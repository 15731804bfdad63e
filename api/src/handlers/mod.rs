//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod feed;

pub use feed::get_feed_xml;
