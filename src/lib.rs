//! # Bubo
//!
//! A batch feed reader: fetch every configured RSS/Atom/JSON feed, normalize
//! the items, and write one timeline sorted newest first.
//!
//! ## Architecture
//!
//! ```text
//! Config → Scheduler → TransportChain → Normalizer → Aggregator → Render
//! ```
//!
//! - [`scheduler`]: staggered fan-out with a completion barrier
//! - [`fetcher`]: HTTP fetching through an ordered list of transport profiles
//! - [`normalizer`]: converts feed items into [`CanonicalPost`](domain::CanonicalPost)s
//! - [`aggregator`]: collects posts and failures, sorts the timeline
//! - [`render`]: writes the HTML or JSON artifact
//!
//! ## Quick Start
//!
//! ```bash
//! # List configured feeds
//! bubo --config bubo.toml list
//!
//! # Fetch everything and write public/index.html
//! bubo --config bubo.toml build
//! ```
//!
//! A failing feed never aborts a build. It is reported in the error list of
//! the [`BuildResult`](domain::BuildResult) instead.

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// transport chain, normalizer and scheduler.
pub mod app;

/// Post collection, error collection and final sorting.
pub mod aggregator;

/// Command-line interface using clap.
///
/// - `build` - Fetch every feed and write the timeline
/// - `list` - Show configured feeds and their start delays
pub mod cli;

/// Configuration loading from `bubo.toml` or `feeds.json`.
pub mod config;

/// Core domain models.
///
/// - [`FeedSource`](domain::FeedSource): a configured (group, url) pair
/// - [`CanonicalPost`](domain::CanonicalPost): one normalized feed item
/// - [`BuildResult`](domain::BuildResult): sorted posts plus failures
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for one fetch attempt
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation bound to a profile
/// - [`TransportChain`](fetcher::TransportChain): tries profiles in order
pub mod fetcher;

/// Feed parsing and normalization.
///
/// Converts RSS 0.9x/1.0/2.0, Atom and JSON feeds into
/// [`CanonicalPost`](domain::CanonicalPost)s.
pub mod normalizer;

/// HTML and JSON output.
pub mod render;

/// Concurrent fetching of every configured feed.
pub mod scheduler;
