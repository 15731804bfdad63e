//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod site_map;

#[cfg(test)]
pub use site_map::MockSiteMapProvider;
pub use site_map::SiteMapProvider;
