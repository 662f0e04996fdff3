use crate::synthetic;
use crate::{
    CycleMode, DashboardSummary, DashboardViewState, SeriesMap, SourceKind, SourceSet,
    UpcomingEvent,
};

/// What one cycle managed to fetch.
///
/// Failed, timed-out and unsupported sources are already folded in: an absent
/// summary is `None`, an absent series or event list is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fetched {
    /// Headline counters, if the source delivered.
    pub summary: Option<DashboardSummary>,
    /// Quarter averages.
    pub average_by_quarter: SeriesMap,
    /// Region averages.
    pub average_by_region: SeriesMap,
    /// Grade averages.
    pub average_by_grade: SeriesMap,
    /// Upcoming events.
    pub upcoming_events: Vec<UpcomingEvent>,
}

impl Fetched {
    /// Sources that delivered nothing usable.
    #[must_use]
    pub fn absent(&self) -> SourceSet {
        SourceKind::ALL
            .into_iter()
            .filter(|k| self.is_absent(*k))
            .collect()
    }

    /// Whether `source` delivered nothing usable.
    #[must_use]
    pub fn is_absent(&self, source: SourceKind) -> bool {
        match source {
            SourceKind::Summary => self.summary.is_none(),
            SourceKind::AverageByQuarter => self.average_by_quarter.is_empty(),
            SourceKind::AverageByRegion => self.average_by_region.is_empty(),
            SourceKind::AverageByGrade => self.average_by_grade.is_empty(),
            SourceKind::UpcomingEvents => self.upcoming_events.is_empty(),
        }
    }

    /// Whether every source came back absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.absent().is_all()
    }
}

/// A merged, publishable state and its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    /// The state to publish (`is_loading` is always false).
    pub state: DashboardViewState,
    /// Live or demo.
    pub mode: CycleMode,
}

impl Merged {
    /// The fully synthetic outcome, optionally carrying a diagnostic message.
    #[must_use]
    pub fn demo(error: Option<String>) -> Self {
        Self {
            state: DashboardViewState {
                error,
                ..synthetic::view_state()
            },
            mode: CycleMode::Demo,
        }
    }
}

fn or_synthetic<T>(value: T, is_usable: impl FnOnce(&T) -> bool, fallback: fn() -> T) -> T {
    if is_usable(&value) { value } else { fallback() }
}

/// Classify a cycle's fetch results and backfill absent fields.
///
/// Rules:
/// - Everything absent → `Demo`: every field synthetic, synthetic flag set.
/// - Otherwise → `Live`: each field keeps its fetched value when present and
///   non-empty, else takes its synthetic default. The synthetic flag follows
///   the summary alone; a live summary with backfilled charts is still live.
#[must_use]
pub fn merge(fetched: Fetched) -> Merged {
    if fetched.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "gradeboard::merge", "every source absent; using demo data");
        return Merged::demo(None);
    }

    let summary_absent = fetched.summary.is_none();
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "gradeboard::merge",
        absent = ?fetched.absent(),
        "backfilling absent sources"
    );

    let state = DashboardViewState {
        summary: Some(fetched.summary.unwrap_or_else(synthetic::summary)),
        average_by_quarter: or_synthetic(
            fetched.average_by_quarter,
            |m| !m.is_empty(),
            synthetic::average_by_quarter,
        ),
        average_by_region: or_synthetic(
            fetched.average_by_region,
            |m| !m.is_empty(),
            synthetic::average_by_region,
        ),
        average_by_grade: or_synthetic(
            fetched.average_by_grade,
            |m| !m.is_empty(),
            synthetic::average_by_grade,
        ),
        upcoming_events: or_synthetic(
            fetched.upcoming_events,
            |v| !v.is_empty(),
            synthetic::upcoming_events,
        ),
        is_loading: false,
        is_using_synthetic_data: summary_absent,
        error: None,
    };

    Merged {
        state,
        mode: CycleMode::Live,
    }
}
