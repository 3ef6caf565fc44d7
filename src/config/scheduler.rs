use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Start-time staggering for the fetch fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Delay between consecutive start slots in milliseconds (default: 850)
    pub delay_ms: u64,

    /// Sources per start slot, and the cap on in-flight fetches.
    /// Unset means every source starts immediately.
    pub max_connections: Option<usize>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            delay_ms: 850,
            max_connections: None,
        }
    }
}

impl SchedulerConfig {
    /// When the fetch for the source at `index` may start, relative to the
    /// beginning of the build.
    pub fn start_delay(&self, index: usize) -> Duration {
        let slot = match self.max_connections {
            Some(batch) if batch > 0 => index / batch,
            _ => 0,
        };
        Duration::from_millis(self.delay_ms.saturating_mul(slot as u64))
    }
}
