use async_trait::async_trait;
use gradeboard_core::connector::{
    DashboardConnector, GradeAverageProvider, QuarterAverageProvider, RegionAverageProvider,
    SummaryProvider, UpcomingEventsProvider,
};
use gradeboard_core::{DashboardError, DashboardSummary, SeriesMap, SourceKind, SourceSet, UpcomingEvent};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Fixture values differ from the synthetic fallback so a dashboard built on
/// this connector is recognizably "live".
pub struct MockConnector {
    serves: SourceSet,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// A connector serving every source.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            serves: SourceSet::all(),
        }
    }

    /// A connector that advertises only the given sources.
    #[must_use]
    pub const fn only(serves: SourceSet) -> Self {
        Self { serves }
    }

    /// The fixture summary this connector returns.
    #[must_use]
    pub fn fixture_summary() -> DashboardSummary {
        fixtures::summary::current()
    }

    /// The fixture quarter series.
    #[must_use]
    pub fn fixture_average_by_quarter() -> SeriesMap {
        fixtures::series::by_quarter()
    }

    /// The fixture region series.
    #[must_use]
    pub fn fixture_average_by_region() -> SeriesMap {
        fixtures::series::by_region()
    }

    /// The fixture grade series.
    #[must_use]
    pub fn fixture_average_by_grade() -> SeriesMap {
        fixtures::series::by_grade()
    }

    /// The fixture event list.
    #[must_use]
    pub fn fixture_upcoming_events() -> Vec<UpcomingEvent> {
        fixtures::events::upcoming()
    }

    const fn serves(&self, source: SourceKind) -> bool {
        self.serves.has(source)
    }
}

impl DashboardConnector for MockConnector {
    fn name(&self) -> &'static str {
        "gradeboard-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        self.serves(SourceKind::Summary)
            .then_some(self as &dyn SummaryProvider)
    }
    fn as_quarter_average_provider(&self) -> Option<&dyn QuarterAverageProvider> {
        self.serves(SourceKind::AverageByQuarter)
            .then_some(self as &dyn QuarterAverageProvider)
    }
    fn as_region_average_provider(&self) -> Option<&dyn RegionAverageProvider> {
        self.serves(SourceKind::AverageByRegion)
            .then_some(self as &dyn RegionAverageProvider)
    }
    fn as_grade_average_provider(&self) -> Option<&dyn GradeAverageProvider> {
        self.serves(SourceKind::AverageByGrade)
            .then_some(self as &dyn GradeAverageProvider)
    }
    fn as_upcoming_events_provider(&self) -> Option<&dyn UpcomingEventsProvider> {
        self.serves(SourceKind::UpcomingEvents)
            .then_some(self as &dyn UpcomingEventsProvider)
    }
}

#[async_trait]
impl SummaryProvider for MockConnector {
    async fn summary(&self) -> Result<DashboardSummary, DashboardError> {
        Ok(fixtures::summary::current())
    }
}

#[async_trait]
impl QuarterAverageProvider for MockConnector {
    async fn average_by_quarter(&self) -> Result<SeriesMap, DashboardError> {
        Ok(fixtures::series::by_quarter())
    }
}

#[async_trait]
impl RegionAverageProvider for MockConnector {
    async fn average_by_region(&self) -> Result<SeriesMap, DashboardError> {
        Ok(fixtures::series::by_region())
    }
}

#[async_trait]
impl GradeAverageProvider for MockConnector {
    async fn average_by_grade(&self) -> Result<SeriesMap, DashboardError> {
        Ok(fixtures::series::by_grade())
    }
}

#[async_trait]
impl UpcomingEventsProvider for MockConnector {
    async fn upcoming_events(&self) -> Result<Vec<UpcomingEvent>, DashboardError> {
        Ok(fixtures::events::upcoming())
    }
}
