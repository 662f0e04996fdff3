//! Configuration types shared across the engine and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::SourceKind;

/// Global configuration for the `Dashboard` aggregation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Minimum interval between accepted `load()` calls while the published
    /// state already holds a summary.
    pub cooldown: Duration,
    /// Timeout for the summary source. The headline value gets the longest grace period.
    pub summary_timeout: Duration,
    /// Timeout applied to each of the three series sources.
    pub series_timeout: Duration,
    /// Timeout for the upcoming events source.
    pub events_timeout: Duration,
}

impl DashboardConfig {
    /// The timeout that bounds a single call to `source`.
    #[must_use]
    pub const fn timeout_for(&self, source: SourceKind) -> Duration {
        match source {
            SourceKind::Summary => self.summary_timeout,
            SourceKind::AverageByQuarter
            | SourceKind::AverageByRegion
            | SourceKind::AverageByGrade => self.series_timeout,
            SourceKind::UpcomingEvents => self.events_timeout,
        }
    }

    /// Upper bound on a cycle's wall-clock length: the slowest per-source timeout.
    #[must_use]
    pub fn max_timeout(&self) -> Duration {
        SourceKind::ALL
            .into_iter()
            .map(|k| self.timeout_for(k))
            .max()
            .unwrap_or_default()
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_secs(10),
            summary_timeout: Duration::from_secs(15),
            series_timeout: Duration::from_secs(10),
            events_timeout: Duration::from_secs(8),
        }
    }
}
