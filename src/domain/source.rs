use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One configured feed: the group it is displayed under and where to fetch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub group: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(group: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            url: url.into(),
        }
    }

    /// Flatten a group -> urls mapping into scheduling order.
    ///
    /// Groups are visited in map order, urls in the order they were configured.
    pub fn enumerate(feeds: &BTreeMap<String, Vec<String>>) -> Vec<FeedSource> {
        feeds
            .iter()
            .flat_map(|(group, urls)| urls.iter().map(move |url| FeedSource::new(group, url)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_preserves_url_order() {
        let mut feeds = BTreeMap::new();
        feeds.insert(
            "News".to_string(),
            vec!["https://b.test/rss".to_string(), "https://a.test/rss".to_string()],
        );
        feeds.insert("Blogs".to_string(), vec!["https://c.test/feed".to_string()]);

        let sources = FeedSource::enumerate(&feeds);
        assert_eq!(
            sources,
            vec![
                FeedSource::new("Blogs", "https://c.test/feed"),
                FeedSource::new("News", "https://b.test/rss"),
                FeedSource::new("News", "https://a.test/rss"),
            ]
        );
    }

    #[test]
    fn test_enumerate_empty_groups() {
        let mut feeds = BTreeMap::new();
        feeds.insert("Empty".to_string(), Vec::new());
        assert!(FeedSource::enumerate(&feeds).is_empty());
    }
}
