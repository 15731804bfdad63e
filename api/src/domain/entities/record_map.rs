//! Record map domain entity
//!
//! A record map is the content-tree fragment Notion returns for one page:
//! a block table plus the collections those blocks hang off. Only the
//! fields the feed needs are decoded; everything else is ignored.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Datelike, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::notion_id::NotionId;

/// Block type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Page,
    CollectionView,
    CollectionViewPage,
    /// Any content block the feed does not care about
    #[serde(other)]
    Other,
}

/// Table a record's parent lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentTable {
    Block,
    Collection,
    Space,
    Team,
    #[serde(other)]
    Other,
}

/// A single node of the content tree
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub id: NotionId,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default)]
    pub parent_id: Option<NotionId>,
    #[serde(default)]
    pub parent_table: Option<ParentTable>,
    /// Raw Notion properties (rich text arrays keyed by property id)
    #[serde(default)]
    pub properties: Option<serde_json::Value>,
    /// Creation time in milliseconds since the epoch
    #[serde(default)]
    pub created_time: Option<i64>,
}

impl Block {
    /// Plain text of the `title` property, if it has any content
    pub fn title(&self) -> Option<String> {
        let segments = self.properties.as_ref()?.get("title")?.as_array()?;
        let title: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(|text| text.as_str()))
            .collect();

        let title = title.trim();
        if title.is_empty() {
            None
        } else {
            Some(title.to_string())
        }
    }

    /// Creation time, if it falls within the years an RFC 2822 date can carry
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_time
            .and_then(DateTime::from_timestamp_millis)
            .filter(|date| (0..=9999).contains(&date.year()))
    }
}

/// A database; its rows are page blocks with `parent_table = collection`
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    pub id: NotionId,
    #[serde(default)]
    pub parent_id: Option<NotionId>,
    #[serde(default)]
    pub parent_table: Option<ParentTable>,
}

/// Envelope Notion wraps around every record (`{"role": ..., "value": ...}`)
#[derive(Debug, Deserialize)]
struct Record<T> {
    value: Option<T>,
}

/// Content tree of a single page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordMap {
    /// Blocks in document order
    #[serde(rename = "block", default, deserialize_with = "deserialize_block_table")]
    pub blocks: Vec<Block>,
    #[serde(
        rename = "collection",
        default,
        deserialize_with = "deserialize_collection_table"
    )]
    pub collections: HashMap<NotionId, Collection>,
}

impl RecordMap {
    pub fn block(&self, id: &NotionId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == *id)
    }

    pub fn collection(&self, id: &NotionId) -> Option<&Collection> {
        self.collections.get(id)
    }

    /// The block describing the page itself.
    ///
    /// That is the block keyed by the page's own id. Record maps produced
    /// without it fall back to the first block in document order, which
    /// is where Notion places the page block.
    pub fn root_block(&self, page_id: &NotionId) -> Option<&Block> {
        self.block(page_id).or_else(|| self.blocks.first())
    }

    /// Nearest ancestor of `block` whose type is `page`.
    ///
    /// Parents in the `collection` table are resolved through the
    /// collection table, everything else through the block table. A parent
    /// missing from this record map ends the walk with `None`.
    pub fn parent_page(&self, block: &Block) -> Option<&Block> {
        let mut parent_id = block.parent_id;
        let mut parent_table = block.parent_table;

        // Every step visits a distinct record unless the data is cyclic
        let max_steps = self.blocks.len() + self.collections.len();
        for _ in 0..=max_steps {
            let id = parent_id?;
            match parent_table {
                Some(ParentTable::Collection) => {
                    let collection = self.collection(&id)?;
                    parent_id = collection.parent_id;
                    parent_table = collection.parent_table;
                }
                _ => {
                    let parent = self.block(&id)?;
                    if parent.block_type == BlockType::Page {
                        return Some(parent);
                    }
                    parent_id = parent.parent_id;
                    parent_table = parent.parent_table;
                }
            }
        }

        None
    }

    /// A blog post is a database row whose database sits directly on the root page
    pub fn is_blog_post(&self, block: &Block, root_page_id: &NotionId) -> bool {
        block.block_type == BlockType::Page
            && block.parent_table == Some(ParentTable::Collection)
            && self
                .parent_page(block)
                .is_some_and(|parent| parent.id == *root_page_id)
    }
}

/// JSON object decoded as a `Vec` of entries in document order
pub(crate) struct OrderedMap<K, V>(pub Vec<(K, V)>);

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
        where
            K: Deserialize<'de>,
            V: Deserialize<'de>,
        {
            type Value = OrderedMap<K, V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

fn deserialize_block_table<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let table: Option<OrderedMap<NotionId, Record<Block>>> = Option::deserialize(deserializer)?;
    Ok(table
        .map(|OrderedMap(entries)| {
            entries
                .into_iter()
                .filter_map(|(_, record)| record.value)
                .collect()
        })
        .unwrap_or_default())
}

fn deserialize_collection_table<'de, D>(
    deserializer: D,
) -> Result<HashMap<NotionId, Collection>, D::Error>
where
    D: Deserializer<'de>,
{
    let table: Option<HashMap<NotionId, Record<Collection>>> = Option::deserialize(deserializer)?;
    Ok(table
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(id, record)| record.value.map(|collection| (id, collection)))
        .collect())
}
