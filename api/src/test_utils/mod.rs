//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory provider covers most tests. Call-count assertions use
//! the `mockall` mock generated for `SiteMapProvider` instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
