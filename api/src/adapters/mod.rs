//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod site_map;

pub use site_map::ConfiguredSiteMapProvider;
