use std::path::{Path, PathBuf};

use crate::app::error::Result;
use crate::config::Config;
use crate::domain::{BuildResult, FeedSource};
use crate::fetcher::TransportChain;
use crate::normalizer::Normalizer;
use crate::scheduler::FetchScheduler;

pub struct AppContext {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub scheduler: FetchScheduler,
}

impl AppContext {
    /// Load configuration from `config_path` (or the default locations) and
    /// wire up the pipeline.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let (config, path) = Config::load(config_path)?;
        let mut ctx = Self::from_config(config)?;
        ctx.config_path = Some(path);
        Ok(ctx)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;

        let chain = TransportChain::from_config(&config.transport)?;
        let scheduler = FetchScheduler::new(chain, Normalizer::new(), config.scheduler);

        Ok(Self {
            config,
            config_path: None,
            scheduler,
        })
    }

    pub fn sources(&self) -> Vec<FeedSource> {
        FeedSource::enumerate(&self.config.feeds)
    }

    pub async fn build(&self) -> BuildResult {
        self.scheduler.run(self.sources()).await
    }
}
