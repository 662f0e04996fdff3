//! Report envelopes produced by the engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::source::{SourceKind, SourceSet};

/// How a completed cycle was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleMode {
    /// At least one source delivered data; absent fields were backfilled.
    #[default]
    Live,
    /// Nothing usable arrived (or the cycle faulted); every field is synthetic.
    Demo,
}

/// Summary of one aggregation cycle.
///
/// Carries which sources were absent and why. This is diagnostic data for logs
/// and tests; the UI only sees the live-vs-demo flag on the view state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CycleReport {
    /// Monotonic cycle number, starting at 1.
    pub cycle: u64,
    /// Classification of the published state.
    pub mode: CycleMode,
    /// Sources that failed, timed out, had no connector, or returned nothing.
    pub absent: SourceSet,
    /// Non-fatal per-source failures encountered during the cycle.
    pub warnings: Vec<DashboardError>,
    /// Wall-clock time from launch to publication.
    pub elapsed: Duration,
    /// Engine-level fault that forced the demo fallback, if any.
    pub fault: Option<DashboardError>,
}

impl CycleReport {
    /// Whether the published state was fully synthetic.
    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.mode == CycleMode::Demo
    }

    /// Whether `source` was absent in this cycle.
    #[must_use]
    pub const fn is_absent(&self, source: SourceKind) -> bool {
        self.absent.has(source)
    }
}

/// Result of a `load()` or `refresh()` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadOutcome {
    /// A cycle ran and published a new state.
    Completed(CycleReport),
    /// `load()` was skipped: the last cycle finished within the cooldown window
    /// and the current state already has a summary.
    Throttled,
    /// Another cycle was already in flight; the request was dropped, not queued.
    AlreadyRunning,
}

impl LoadOutcome {
    /// The report of the cycle this request ran, if it ran one.
    #[must_use]
    pub const fn report(&self) -> Option<&CycleReport> {
        match self {
            Self::Completed(r) => Some(r),
            Self::Throttled | Self::AlreadyRunning => None,
        }
    }

    /// Whether this request started (and finished) a cycle.
    #[must_use]
    pub const fn ran(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}
