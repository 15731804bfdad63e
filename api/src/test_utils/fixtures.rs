//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use serde_json::json;
use uuid::Uuid;

use crate::config::SiteConfig;
use crate::domain::entities::{CanonicalPage, NotionId, RecordMap, SiteMap};

/// Deterministic id for tests
pub fn notion_id(n: u128) -> NotionId {
    NotionId(Uuid::from_u128(n))
}

/// Root page of the test blog
pub fn root_page_id() -> NotionId {
    NotionId::parse("7875426197cf461698809def95960ebf").unwrap()
}

/// Site config pointing at the test blog
pub fn test_site_config() -> SiteConfig {
    SiteConfig {
        name: "Test Blog".to_string(),
        host: "https://blog.example.com".to_string(),
        language: "en-US".to_string(),
        description: "Writing about tests".to_string(),
        root_page_id: root_page_id(),
    }
}

/// Record map of a post living in a database that is embedded in `root_id`.
///
/// Blocks appear in the order Notion returns them: the post first, then the
/// database view, then the root page.
pub fn blog_post_record_map(post_id: NotionId, title: &str, root_id: NotionId) -> RecordMap {
    let collection_id = Uuid::new_v4().to_string();
    let view_id = Uuid::new_v4().to_string();
    let post = post_id.to_string();
    let root = root_id.to_string();

    serde_json::from_value(json!({
        "block": {
            post.clone(): { "role": "reader", "value": {
                "id": post,
                "type": "page",
                "parent_id": collection_id,
                "parent_table": "collection",
                "properties": { "title": [[title]] },
                "created_time": 1_704_067_200_000_i64
            }},
            view_id.clone(): { "role": "reader", "value": {
                "id": view_id,
                "type": "collection_view",
                "parent_id": root,
                "parent_table": "block"
            }},
            root.clone(): { "role": "reader", "value": {
                "id": root,
                "type": "page",
                "parent_id": Uuid::new_v4().to_string(),
                "parent_table": "space"
            }}
        },
        "collection": {
            collection_id.clone(): { "role": "reader", "value": {
                "id": collection_id,
                "parent_id": view_id,
                "parent_table": "block"
            }}
        }
    }))
    .unwrap()
}

/// Record map of a page that sits directly in the workspace
pub fn standalone_page_record_map(page_id: NotionId, title: &str) -> RecordMap {
    let page = page_id.to_string();

    serde_json::from_value(json!({
        "block": {
            page.clone(): { "role": "reader", "value": {
                "id": page,
                "type": "page",
                "parent_id": Uuid::new_v4().to_string(),
                "parent_table": "space",
                "properties": { "title": [[title]] }
            }}
        }
    }))
    .unwrap()
}

/// Builds site maps page by page, keeping insertion order
#[derive(Default)]
pub struct SiteMapBuilder {
    site_map: SiteMap,
}

impl SiteMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, path: &str, page_id: NotionId, record_map: RecordMap) -> Self {
        self.push_path(path, page_id);
        self.site_map.page_map.insert(page_id, Some(record_map));
        self
    }

    /// Page the builder failed to load (`null` in `pageMap`)
    pub fn with_failed_page(mut self, path: &str, page_id: NotionId) -> Self {
        self.push_path(path, page_id);
        self.site_map.page_map.insert(page_id, None);
        self
    }

    /// Path whose page id has no `pageMap` entry at all
    pub fn with_unmapped_path(mut self, path: &str, page_id: NotionId) -> Self {
        self.push_path(path, page_id);
        self
    }

    pub fn build(self) -> SiteMap {
        self.site_map
    }

    fn push_path(&mut self, path: &str, page_id: NotionId) {
        self.site_map.canonical_page_map.push(CanonicalPage {
            path: path.to_string(),
            page_id,
        });
    }
}
