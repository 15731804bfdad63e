//! Notion identifier
//!
//! Notion hands out ids in two spellings: the compact 32-hex form used in
//! page URLs and the hyphenated UUID form used inside record maps. Both
//! parse into the same `NotionId`, so comparisons never depend on spelling.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a Notion block, page or collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotionId(pub Uuid);

impl NotionId {
    /// Parse either the compact or the hyphenated spelling
    pub fn parse(raw: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(raw.trim()).map(Self)
    }
}

impl std::fmt::Display for NotionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
