//! Dashboard model rendered by the UI layer.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate counters shown on the dashboard cards.
///
/// Either comes from the transactional backend or is synthesized; it is never
/// patched after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Number of enrolled students.
    pub total_students: u32,
    /// Number of active enrollments.
    pub total_enrollments: u32,
    /// Number of teachers.
    pub total_teachers: u32,
    /// Overall grade average across all students.
    pub overall_average: f64,
    /// Share of students with a passing average, in percent.
    pub approval_rate: f64,
    /// Number of distinct grade levels.
    pub grade_levels: u32,
    /// Revenue collected in the current period.
    pub revenue_total: Decimal,
    /// Number of scheduled upcoming events.
    pub upcoming_events: u32,
    /// Number of open performance alerts.
    pub performance_alerts: u32,
    /// When the backend last recomputed these counters.
    pub last_updated: DateTime<Utc>,
}

/// Categorical label → numeric average (quarter, region or grade).
///
/// Keys are unique. An absent key means "no data for that category", not zero.
/// Iteration order is deterministic but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesMap(BTreeMap<String, f64>);

impl SeriesMap {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or replace the average for `label`, returning the previous value.
    pub fn insert(&mut self, label: impl Into<String>, average: f64) -> Option<f64> {
        self.0.insert(label.into(), average)
    }

    /// The average for `label`, if the category has data.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    /// Number of categories with data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no category has data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(label, average)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Iterate the category labels.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Consume into the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.0
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SeriesMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<BTreeMap<String, f64>> for SeriesMap {
    fn from(map: BTreeMap<String, f64>) -> Self {
        Self(map)
    }
}

/// A scheduled event shown in the "upcoming" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingEvent {
    /// Short title.
    pub title: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Scheduled start.
    pub starts_at: DateTime<Utc>,
    /// Scheduled end.
    pub ends_at: DateTime<Utc>,
    /// Grade level the event is associated with.
    pub grade_level: String,
}

impl UpcomingEvent {
    /// Build an event without a description.
    pub fn new(
        title: impl Into<String>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        grade_level: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            starts_at,
            ends_at,
            grade_level: grade_level.into(),
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The snapshot published by the engine after every cycle.
///
/// Snapshots are replaced wholesale and never patched in place. While
/// `is_loading` is set, the data fields still hold the previous cycle's values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViewState {
    /// Headline counters, absent only before the first completed cycle.
    pub summary: Option<DashboardSummary>,
    /// Average per academic quarter.
    pub average_by_quarter: SeriesMap,
    /// Average per region.
    pub average_by_region: SeriesMap,
    /// Average per grade level.
    pub average_by_grade: SeriesMap,
    /// Upcoming events.
    pub upcoming_events: Vec<UpcomingEvent>,
    /// A refresh cycle is running.
    pub is_loading: bool,
    /// The summary (and possibly more) comes from the synthetic provider.
    pub is_using_synthetic_data: bool,
    /// Diagnostic message, set only when the cycle itself faulted.
    pub error: Option<String>,
}

impl DashboardViewState {
    /// The state published at engine construction: no data, loading.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// A copy of this snapshot with `is_loading` set and data fields untouched.
    #[must_use]
    pub fn as_loading(&self) -> Self {
        Self {
            is_loading: true,
            ..self.clone()
        }
    }

    /// Whether a summary is present.
    #[must_use]
    pub const fn has_summary(&self) -> bool {
        self.summary.is_some()
    }

    /// Whether every data field holds something renderable.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
            && !self.average_by_quarter.is_empty()
            && !self.average_by_region.is_empty()
            && !self.average_by_grade.is_empty()
            && !self.upcoming_events.is_empty()
    }
}
