mod errors;

pub use errors::ErrorCollector;

use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::{BuildResult, CanonicalPost};

/// Single owner of everything the fetch tasks produce.
///
/// Posts are kept per group in arrival order until [`finalize`](Self::finalize)
/// flattens and sorts them.
#[derive(Debug, Default)]
pub struct Aggregator {
    groups: BTreeMap<String, Vec<CanonicalPost>>,
    errors: ErrorCollector,
    feed_count: usize,
}

impl Aggregator {
    pub fn new(feed_count: usize) -> Self {
        Self {
            feed_count,
            ..Default::default()
        }
    }

    pub fn add_posts(&mut self, group: &str, posts: Vec<CanonicalPost>) {
        self.groups.entry(group.to_string()).or_default().extend(posts);
    }

    pub fn add_error(&mut self, url: &str, reason: &str) {
        self.errors.push(url, reason);
    }

    /// Flatten every group and sort newest first. Equal timestamps keep
    /// insertion order. Does not consume the accumulated state, so repeated
    /// calls yield the same result.
    pub fn finalize(&self, elapsed: Duration) -> BuildResult {
        let mut posts: Vec<CanonicalPost> = self.groups.values().flatten().cloned().collect();
        posts.sort_by(|a, b| b.timestamp_ms.cmp(&a.timestamp_ms));

        BuildResult {
            posts,
            errors: self.errors.entries().to_vec(),
            feed_count: self.feed_count,
            elapsed,
        }
    }
}
