use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A feed item normalized into the shape the renderer consumes.
///
/// Every field is always present: missing titles and links become empty
/// strings and an unparseable date becomes `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalPost {
    pub title: String,
    pub link: String,
    pub timestamp_ms: i64,
    pub group: String,
    pub feed_title: String,
}

impl CanonicalPost {
    /// The publication instant, or `None` for posts without a usable date.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        if self.timestamp_ms == 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.timestamp_ms)
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}
