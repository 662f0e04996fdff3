use async_trait::async_trait;

use crate::DashboardError;
pub use gradeboard_types::ConnectorKey;
use gradeboard_types::{DashboardSummary, SeriesMap, SourceKind, UpcomingEvent};

/// Focused role trait for connectors that serve the headline summary.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Fetch the aggregate counters.
    async fn summary(&self) -> Result<DashboardSummary, DashboardError>;
}

/// Focused role trait for connectors that serve the average per academic quarter.
#[async_trait]
pub trait QuarterAverageProvider: Send + Sync {
    /// Fetch quarter → average.
    async fn average_by_quarter(&self) -> Result<SeriesMap, DashboardError>;
}

/// Focused role trait for connectors that serve the average per region.
#[async_trait]
pub trait RegionAverageProvider: Send + Sync {
    /// Fetch region → average.
    async fn average_by_region(&self) -> Result<SeriesMap, DashboardError>;
}

/// Focused role trait for connectors that serve the average per grade level.
#[async_trait]
pub trait GradeAverageProvider: Send + Sync {
    /// Fetch grade level → average.
    async fn average_by_grade(&self) -> Result<SeriesMap, DashboardError>;
}

/// Focused role trait for connectors that serve upcoming events.
#[async_trait]
pub trait UpcomingEventsProvider: Send + Sync {
    /// Fetch the finite list of upcoming events.
    async fn upcoming_events(&self) -> Result<Vec<UpcomingEvent>, DashboardError>;
}

/// Main connector trait: a backend adapter advertising which sources it serves.
///
/// Connectors never apply their own deadlines. The engine wraps every call in
/// the per-source timeout and folds any failure into "absent", so an adapter
/// only has to report what went wrong.
pub trait DashboardConnector: Send + Sync {
    /// A stable identifier used in logs and reports (e.g. "gradeboard-olap").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise summary capability by returning a usable trait object reference when supported.
    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        None
    }

    /// If implemented, returns a trait object for quarter averages.
    fn as_quarter_average_provider(&self) -> Option<&dyn QuarterAverageProvider> {
        None
    }

    /// If implemented, returns a trait object for region averages.
    fn as_region_average_provider(&self) -> Option<&dyn RegionAverageProvider> {
        None
    }

    /// If implemented, returns a trait object for grade averages.
    fn as_grade_average_provider(&self) -> Option<&dyn GradeAverageProvider> {
        None
    }

    /// If implemented, returns a trait object for upcoming events.
    fn as_upcoming_events_provider(&self) -> Option<&dyn UpcomingEventsProvider> {
        None
    }

    /// Whether this connector advertises `source`.
    fn supports(&self, source: SourceKind) -> bool {
        match source {
            SourceKind::Summary => self.as_summary_provider().is_some(),
            SourceKind::AverageByQuarter => self.as_quarter_average_provider().is_some(),
            SourceKind::AverageByRegion => self.as_region_average_provider().is_some(),
            SourceKind::AverageByGrade => self.as_grade_average_provider().is_some(),
            SourceKind::UpcomingEvents => self.as_upcoming_events_provider().is_some(),
        }
    }
}
