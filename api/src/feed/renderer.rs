//! RSS renderer
//!
//! Serializes a `BlogFeed` into an indented RSS 2.0 document. The channel
//! advertises its own address through an `atom:link rel="self"` element.

use chrono::{DateTime, Datelike, Utc};
use rss::extension::atom::{AtomExtension, Link};
use rss::validation::Validate;
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use crate::app::{BlogFeed, FeedPost};
use crate::error::FeedError;

const GENERATOR: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Render the feed as indented RSS 2.0 XML
pub fn render_rss(feed: &BlogFeed) -> Result<String, FeedError> {
    let channel = build_channel(feed);

    channel
        .validate()
        .map_err(|e| FeedError::Validation(e.to_string()))?;

    let xml = channel.pretty_write_to(Vec::new(), b' ', 2)?;
    Ok(String::from_utf8(xml)?)
}

fn build_channel(feed: &BlogFeed) -> Channel {
    let items: Vec<Item> = feed.posts.iter().map(post_to_item).collect();

    ChannelBuilder::default()
        .title(feed.title.clone())
        .link(feed.site_url.clone())
        .description(feed.description.clone())
        .language(Some(feed.language.clone()))
        .generator(Some(GENERATOR.to_string()))
        .last_build_date(Some(Utc::now().to_rfc2822()))
        .ttl(Some(feed.ttl_minutes.to_string()))
        .atom_ext(Some(self_link(&feed.feed_url)))
        .items(items)
        .build()
}

fn self_link(feed_url: &str) -> AtomExtension {
    let mut link = Link::default();
    link.set_href(feed_url);
    link.set_rel("self");
    link.set_mime_type(Some("application/rss+xml".to_string()));

    AtomExtension { links: vec![link] }
}

fn post_to_item(post: &FeedPost) -> Item {
    ItemBuilder::default()
        .title(Some(post.title.clone()))
        .link(Some(post.url.clone()))
        .guid(Some(
            GuidBuilder::default()
                .permalink(true)
                .value(post.url.clone())
                .build(),
        ))
        .pub_date(post.published_at.and_then(rfc2822))
        .build()
}

/// RFC 2822 only has room for four-digit years
fn rfc2822(date: DateTime<Utc>) -> Option<String> {
    (0..=9999)
        .contains(&date.year())
        .then(|| date.to_rfc2822())
}
