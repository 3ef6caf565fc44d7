pub mod entities;
pub mod fields;
pub mod raw;

use crate::app::Result;
use crate::domain::{CanonicalPost, FeedSource};

pub use entities::decode_entities;

/// Posts from one feed together with the title the feed claims for itself.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFeed {
    pub title: String,
    pub posts: Vec<CanonicalPost>,
}

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Convert one fetched payload into canonical posts tagged with the
    /// source's group. Pure: the same body always yields the same posts.
    pub fn normalize(&self, source: &FeedSource, body: &[u8]) -> Result<NormalizedFeed> {
        let feed = raw::parse(body)?;

        let claimed_title = feed
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(decode_entities);
        let feed_title = claimed_title.clone().unwrap_or_else(|| source.url.clone());

        let posts = feed
            .items
            .iter()
            .map(|item| CanonicalPost {
                title: fields::resolve_title(item, claimed_title.as_deref()),
                link: fields::resolve_link(item),
                timestamp_ms: fields::resolve_timestamp(item),
                group: source.group.clone(),
                feed_title: feed_title.clone(),
            })
            .collect();

        Ok(NormalizedFeed {
            title: feed_title,
            posts,
        })
    }
}
