pub mod chain;
pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

pub use chain::TransportChain;
pub use http_fetcher::HttpFetcher;

/// Body of a successful fetch. Only the normalizer looks inside.
#[derive(Debug, Clone)]
pub struct RawFeedResponse {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
    /// Name of the transport profile that produced this response
    pub profile: String,
}

/// Result of driving one source through every transport profile.
#[derive(Debug)]
pub enum FetchOutcome {
    Success(RawFeedResponse),
    Failure(String),
}

/// A single fetch attempt using one fixed configuration.
#[async_trait]
pub trait Fetcher {
    /// Name used in logs and failure reasons
    fn name(&self) -> &str;

    async fn fetch(&self, url: &str) -> Result<RawFeedResponse>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::app::BuboError;

    /// Canned behaviour for one url.
    #[derive(Debug, Clone)]
    pub enum Script {
        Body(String),
        Fail(String),
        /// Respond after a delay
        Slow(Duration, String),
    }

    /// In-memory fetcher answering from a fixed script. Unknown urls fail.
    pub struct ScriptedFetcher {
        name: String,
        scripts: HashMap<String, Script>,
        calls: AtomicUsize,
    }

    impl ScriptedFetcher {
        pub fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                scripts: HashMap::new(),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with(mut self, url: &str, script: Script) -> Self {
            self.scripts.insert(url.to_string(), script);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Fetcher for ScriptedFetcher {
        fn name(&self) -> &str {
            &self.name
        }

        async fn fetch(&self, url: &str) -> Result<RawFeedResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let body = match self.scripts.get(url) {
                Some(Script::Body(body)) => body.clone(),
                Some(Script::Slow(delay, body)) => {
                    tokio::time::sleep(*delay).await;
                    body.clone()
                }
                Some(Script::Fail(reason)) => return Err(BuboError::Other(reason.clone())),
                None => return Err(BuboError::Other(format!("no script for {url}"))),
            };
            Ok(RawFeedResponse {
                body: body.into_bytes(),
                content_type: None,
                profile: self.name.clone(),
            })
        }
    }
}
