use std::time::Duration;

use serde::Serialize;

use super::CanonicalPost;

/// The terminal product of one build: every post, newest first, plus the
/// description of every source that could not be ingested.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildResult {
    pub posts: Vec<CanonicalPost>,
    pub errors: Vec<String>,
    pub feed_count: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

