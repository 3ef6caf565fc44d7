use std::sync::Arc;

use tracing::{debug, warn};

use crate::app::Result;
use crate::config::TransportConfig;
use crate::fetcher::{FetchOutcome, Fetcher, HttpFetcher};

/// Ordered list of fetchers, each tried once until one succeeds.
#[derive(Clone)]
pub struct TransportChain {
    fetchers: Vec<Arc<dyn Fetcher + Send + Sync>>,
}

impl TransportChain {
    pub fn new(fetchers: Vec<Arc<dyn Fetcher + Send + Sync>>) -> Self {
        Self { fetchers }
    }

    /// Build one [`HttpFetcher`] per configured profile, preserving order.
    pub fn from_config(config: &TransportConfig) -> Result<Self> {
        let fetchers = config
            .profiles
            .iter()
            .map(|profile| {
                HttpFetcher::from_profile(profile)
                    .map(|f| Arc::new(f) as Arc<dyn Fetcher + Send + Sync>)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(fetchers))
    }

    /// Try every profile in order. Attempts run sequentially; the first
    /// success wins and no further profiles are tried.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let mut failures = Vec::with_capacity(self.fetchers.len());

        for (attempt, fetcher) in self.fetchers.iter().enumerate() {
            if attempt > 0 {
                warn!("Retrying {} with {} profile", url, fetcher.name());
            }
            debug!("Fetching {} using {} profile", url, fetcher.name());

            match fetcher.fetch(url).await {
                Ok(response) => return FetchOutcome::Success(response),
                Err(e) => {
                    debug!("{} profile failed for {}: {}", fetcher.name(), url, e);
                    failures.push(format!("{}: {}", fetcher.name(), e));
                }
            }
        }

        if failures.is_empty() {
            return FetchOutcome::Failure("no transport profiles configured".into());
        }
        FetchOutcome::Failure(failures.join("; "))
    }
}
