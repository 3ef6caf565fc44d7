use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const FEED_ACCEPT: &str =
    "application/rss+xml, application/atom+xml, application/feed+json, application/xml;q=0.9, */*;q=0.8";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// One combination of headers, timeout and certificate policy used to
/// attempt a fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportProfile {
    /// Name used in logs and error messages
    pub name: String,

    /// Per-attempt timeout in seconds
    pub timeout_secs: u64,

    /// Skip TLS certificate validation
    pub accept_invalid_certs: bool,

    /// User agent string sent with every request
    pub user_agent: String,

    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl Default for TransportProfile {
    fn default() -> Self {
        Self::primary()
    }
}

impl TransportProfile {
    /// Standard feed-reader profile: strict TLS and a moderate timeout.
    pub fn primary() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), FEED_ACCEPT.to_string());

        Self {
            name: "primary".to_string(),
            timeout_secs: 10,
            accept_invalid_certs: false,
            user_agent: concat!("bubo/", env!("CARGO_PKG_VERSION")).to_string(),
            headers,
        }
    }

    /// Browser-lookalike profile for servers that reject non-browser clients.
    pub fn browser() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            "Accept".to_string(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
        );
        headers.insert("Accept-Language".to_string(), "en-US,en;q=0.9".to_string());
        headers.insert("Cache-Control".to_string(), "no-cache".to_string());

        Self {
            name: "browser".to_string(),
            timeout_secs: 15,
            accept_invalid_certs: true,
            user_agent: BROWSER_USER_AGENT.to_string(),
            headers,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Ordered list of profiles tried until one succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub profiles: Vec<TransportProfile>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            profiles: vec![TransportProfile::primary(), TransportProfile::browser()],
        }
    }
}
