use core::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// The five remote sources that feed the dashboard.
///
/// These map one-to-one with connector role traits and allow consistent
/// Display formatting and match-exhaustive handling in the engine, in
/// error labels, and in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Headline counters (students, enrollments, averages, revenue, ...).
    Summary,
    /// Average grade per academic quarter.
    AverageByQuarter,
    /// Average grade per region.
    AverageByRegion,
    /// Average grade per grade level.
    AverageByGrade,
    /// Upcoming scheduled events.
    UpcomingEvents,
}

impl SourceKind {
    /// Every source, in the order the engine launches them.
    pub const ALL: [Self; 5] = [
        Self::Summary,
        Self::AverageByQuarter,
        Self::AverageByRegion,
        Self::AverageByGrade,
        Self::UpcomingEvents,
    ];

    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::AverageByQuarter => "average-by-quarter",
            Self::AverageByRegion => "average-by-region",
            Self::AverageByGrade => "average-by-grade",
            Self::UpcomingEvents => "upcoming-events",
        }
    }

    /// The single-bit [`SourceSet`] for this source.
    #[must_use]
    pub const fn flag(self) -> SourceSet {
        match self {
            Self::Summary => SourceSet::SUMMARY,
            Self::AverageByQuarter => SourceSet::AVERAGE_BY_QUARTER,
            Self::AverageByRegion => SourceSet::AVERAGE_BY_REGION,
            Self::AverageByGrade => SourceSet::AVERAGE_BY_GRADE,
            Self::UpcomingEvents => SourceSet::UPCOMING_EVENTS,
        }
    }

    /// Whether this source produces a categorical [`SeriesMap`](crate::SeriesMap).
    #[must_use]
    pub const fn is_series(self) -> bool {
        matches!(
            self,
            Self::AverageByQuarter | Self::AverageByRegion | Self::AverageByGrade
        )
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = crate::DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| crate::DashboardError::InvalidArg(format!("unknown source: {s}")))
    }
}

bitflags! {
    /// A set of [`SourceKind`]s, e.g. the sources that were absent in a cycle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct SourceSet: u8 {
        /// [`SourceKind::Summary`]
        const SUMMARY = 1 << 0;
        /// [`SourceKind::AverageByQuarter`]
        const AVERAGE_BY_QUARTER = 1 << 1;
        /// [`SourceKind::AverageByRegion`]
        const AVERAGE_BY_REGION = 1 << 2;
        /// [`SourceKind::AverageByGrade`]
        const AVERAGE_BY_GRADE = 1 << 3;
        /// [`SourceKind::UpcomingEvents`]
        const UPCOMING_EVENTS = 1 << 4;
        /// The three chart series.
        const SERIES = Self::AVERAGE_BY_QUARTER.bits()
            | Self::AVERAGE_BY_REGION.bits()
            | Self::AVERAGE_BY_GRADE.bits();
    }
}

impl SourceSet {
    /// Whether `kind` is a member of this set.
    #[must_use]
    pub const fn has(self, kind: SourceKind) -> bool {
        self.contains(kind.flag())
    }

    /// Iterate the member sources in launch order.
    pub fn kinds(self) -> impl Iterator<Item = SourceKind> {
        SourceKind::ALL.into_iter().filter(move |k| self.has(*k))
    }
}

impl From<SourceKind> for SourceSet {
    fn from(kind: SourceKind) -> Self {
        kind.flag()
    }
}

impl FromIterator<SourceKind> for SourceSet {
    fn from_iter<I: IntoIterator<Item = SourceKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, kind| acc | kind.flag())
    }
}
