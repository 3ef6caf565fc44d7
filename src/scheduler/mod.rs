//! Fan-out of every configured feed, joined by a [`CompletionBarrier`].
//!
//! Each source runs in its own task: optional start delay, optional
//! concurrency permit, the transport chain, then normalization. The task
//! sends exactly one [`SourceReport`] to the aggregating loop, which owns
//! all results and finalizes once the barrier closes.

mod barrier;

pub use barrier::{CompletionBarrier, Progress};

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, error, info, warn};

use crate::aggregator::Aggregator;
use crate::config::SchedulerConfig;
use crate::domain::{BuildResult, CanonicalPost, FeedSource};
use crate::fetcher::{FetchOutcome, TransportChain};
use crate::normalizer::Normalizer;

/// Everything one source task hands back.
#[derive(Debug)]
pub struct SourceReport {
    pub index: usize,
    pub source: FeedSource,
    pub outcome: std::result::Result<Vec<CanonicalPost>, String>,
}

pub struct FetchScheduler {
    chain: TransportChain,
    normalizer: Normalizer,
    config: SchedulerConfig,
}

impl FetchScheduler {
    pub fn new(chain: TransportChain, normalizer: Normalizer, config: SchedulerConfig) -> Self {
        Self {
            chain,
            normalizer,
            config,
        }
    }

    /// Start delay for every source, in scheduling order.
    pub fn plan(&self, sources: &[FeedSource]) -> Vec<(FeedSource, Duration)> {
        sources
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), self.config.start_delay(i)))
            .collect()
    }

    /// Drive every source to a success or a recorded failure, then build the
    /// sorted result. Never fails: source problems end up in `errors`.
    pub async fn run(&self, sources: Vec<FeedSource>) -> BuildResult {
        let started = Instant::now();
        let total = sources.len();
        let mut aggregator = Aggregator::new(total);
        let mut barrier = CompletionBarrier::new(total);

        if total == 0 {
            info!("No feeds configured");
            return aggregator.finalize(started.elapsed());
        }

        let (tx, mut rx) = mpsc::channel::<SourceReport>(total);
        let semaphore = self
            .config
            .max_connections
            .map(|n| Arc::new(Semaphore::new(n)));

        for (index, source) in sources.iter().cloned().enumerate() {
            let tx = tx.clone();
            let chain = self.chain.clone();
            let normalizer = self.normalizer.clone();
            let semaphore = semaphore.clone();
            let delay = self.config.start_delay(index);

            tokio::spawn(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                let _permit = match semaphore {
                    Some(s) => s.acquire_owned().await.ok(),
                    None => None,
                };

                let outcome = fetch_source(&chain, &normalizer, &source).await;
                if tx.send(SourceReport { index, source, outcome }).await.is_err() {
                    debug!("Report receiver dropped before source {} reported", index);
                }
            });
        }
        drop(tx);

        while let Some(report) = rx.recv().await {
            if ingest(&mut aggregator, &mut barrier, report) == Progress::Complete {
                break;
            }
        }

        // Channel closed early: some task died without reporting.
        for index in barrier.missing() {
            let source = &sources[index];
            error!("Fetch task for {} ended without reporting", source.url);
            let report = SourceReport {
                index,
                source: source.clone(),
                outcome: Err("fetch task ended without reporting".into()),
            };
            ingest(&mut aggregator, &mut barrier, report);
        }

        info!("Done fetching everything!");
        aggregator.finalize(started.elapsed())
    }
}

fn ingest(aggregator: &mut Aggregator, barrier: &mut CompletionBarrier, report: SourceReport) -> Progress {
    let progress = barrier.record(report.index);
    if progress == Progress::Ignored {
        warn!("Ignoring duplicate report for {}", report.source.url);
        return progress;
    }

    match report.outcome {
        Ok(posts) => aggregator.add_posts(&report.source.group, posts),
        Err(reason) => aggregator.add_error(&report.source.url, &reason),
    }

    if let Progress::Pending { completed, total } = progress {
        debug!("{}/{} feeds reported", completed, total);
    }
    progress
}

async fn fetch_source(
    chain: &TransportChain,
    normalizer: &Normalizer,
    source: &FeedSource,
) -> std::result::Result<Vec<CanonicalPost>, String> {
    info!("Fetching: {}...", source.url);
    let started = Instant::now();

    match chain.fetch(&source.url).await {
        FetchOutcome::Success(response) => match normalizer.normalize(source, &response.body) {
            Ok(feed) => {
                info!(
                    "Successfully fetched: {} ({}) - {:.3} seconds ({} posts via {})",
                    source.url,
                    feed.title,
                    started.elapsed().as_secs_f64(),
                    feed.posts.len(),
                    response.profile
                );
                Ok(feed.posts)
            }
            Err(e) => {
                warn!(
                    "Error processing: {} - {:.3} seconds: {}",
                    source.url,
                    started.elapsed().as_secs_f64(),
                    e
                );
                Err(format!("Error processing: {e}"))
            }
        },
        FetchOutcome::Failure(reason) => {
            warn!(
                "Error fetching {} - {:.3} seconds: {}",
                source.url,
                started.elapsed().as_secs_f64(),
                reason
            );
            Err(format!("Error fetching: {reason}"))
        }
    }
}
