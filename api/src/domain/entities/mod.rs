//! Domain entities
//!
//! Read-only models of the pre-built site map and the Notion content tree
//! it carries for every page.

pub mod notion_id;
pub mod record_map;
pub mod site_map;

pub use notion_id::NotionId;
pub use record_map::{Block, RecordMap};
pub use site_map::{CanonicalPage, SiteMap};
