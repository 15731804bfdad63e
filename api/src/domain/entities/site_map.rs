//! Site map domain entity
//!
//! The site map is built elsewhere and handed over as JSON. It maps every
//! public path to a page id and every page id to that page's record map.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use super::notion_id::NotionId;
use super::record_map::{OrderedMap, RecordMap};

/// Public path of a page together with the page it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPage {
    pub path: String,
    pub page_id: NotionId,
}

/// Snapshot of the site's pages
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMap {
    /// Canonical paths in document order
    #[serde(default, deserialize_with = "deserialize_canonical_pages")]
    pub canonical_page_map: Vec<CanonicalPage>,

    /// Record maps by page id; `None` when the page failed to load upstream
    /// or its record map could not be decoded
    #[serde(default, deserialize_with = "deserialize_page_map")]
    pub page_map: HashMap<NotionId, Option<RecordMap>>,
}

impl SiteMap {
    /// Record map for a page, treating failed loads as absent
    pub fn record_map(&self, page_id: &NotionId) -> Option<&RecordMap> {
        self.page_map.get(page_id).and_then(Option::as_ref)
    }
}

fn deserialize_canonical_pages<'de, D>(deserializer: D) -> Result<Vec<CanonicalPage>, D::Error>
where
    D: Deserializer<'de>,
{
    let pages: Option<OrderedMap<String, NotionId>> = Option::deserialize(deserializer)?;
    Ok(pages
        .map(|OrderedMap(entries)| {
            entries
                .into_iter()
                .map(|(path, page_id)| CanonicalPage { path, page_id })
                .collect()
        })
        .unwrap_or_default())
}

/// Decode each record map on its own so one malformed page only drops that page
fn deserialize_page_map<'de, D>(
    deserializer: D,
) -> Result<HashMap<NotionId, Option<RecordMap>>, D::Error>
where
    D: Deserializer<'de>,
{
    let pages: Option<HashMap<NotionId, serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(pages
        .unwrap_or_default()
        .into_iter()
        .map(|(page_id, raw)| {
            let record_map = serde_json::from_value::<Option<RecordMap>>(raw).unwrap_or_else(|e| {
                tracing::warn!("Skipping undecodable record map for page {}: {}", page_id, e);
                None
            });
            (page_id, record_map)
        })
        .collect())
}
