//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Site map and content-tree models
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
