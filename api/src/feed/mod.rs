//! Feed module
//!
//! RSS 2.0 rendering of the blog feed.

pub mod renderer;

pub use renderer::render_rss;
