use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use gradeboard_core::connector::{
    DashboardConnector, GradeAverageProvider, QuarterAverageProvider, RegionAverageProvider,
    SummaryProvider, UpcomingEventsProvider,
};
use gradeboard_core::{DashboardError, DashboardSummary, SeriesMap, SourceKind, UpcomingEvent};

/// Instruction for how a source call should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(DashboardError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
    /// Sleep on the Tokio clock, then return the value.
    Delay(Duration, T),
    /// Panic inside the call (simulate a buggy adapter).
    Panic(&'static str),
}

#[derive(Default)]
struct InternalState {
    summary: Option<MockBehavior<DashboardSummary>>,
    average_by_quarter: Option<MockBehavior<SeriesMap>>,
    average_by_region: Option<MockBehavior<SeriesMap>>,
    average_by_grade: Option<MockBehavior<SeriesMap>>,
    upcoming_events: Option<MockBehavior<Vec<UpcomingEvent>>>,
    calls: HashMap<SourceKind, usize>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
#[derive(Clone)]
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `summary` calls.
    pub async fn set_summary_behavior(&self, behavior: MockBehavior<DashboardSummary>) {
        self.state.lock().await.summary = Some(behavior);
    }

    /// Set the behavior for `average_by_quarter` calls.
    pub async fn set_average_by_quarter_behavior(&self, behavior: MockBehavior<SeriesMap>) {
        self.state.lock().await.average_by_quarter = Some(behavior);
    }

    /// Set the behavior for `average_by_region` calls.
    pub async fn set_average_by_region_behavior(&self, behavior: MockBehavior<SeriesMap>) {
        self.state.lock().await.average_by_region = Some(behavior);
    }

    /// Set the behavior for `average_by_grade` calls.
    pub async fn set_average_by_grade_behavior(&self, behavior: MockBehavior<SeriesMap>) {
        self.state.lock().await.average_by_grade = Some(behavior);
    }

    /// Set the behavior for `upcoming_events` calls.
    pub async fn set_upcoming_events_behavior(
        &self,
        behavior: MockBehavior<Vec<UpcomingEvent>>,
    ) {
        self.state.lock().await.upcoming_events = Some(behavior);
    }

    /// Make all three series sources behave the same way.
    pub async fn set_series_behavior(&self, behavior: MockBehavior<SeriesMap>) {
        let mut guard = self.state.lock().await;
        guard.average_by_quarter = Some(behavior.clone());
        guard.average_by_region = Some(behavior.clone());
        guard.average_by_grade = Some(behavior);
    }

    /// Number of calls received for `source` since creation or the last clear.
    pub async fn calls(&self, source: SourceKind) -> usize {
        let guard = self.state.lock().await;
        guard.calls.get(&source).copied().unwrap_or(0)
    }

    /// Number of calls received across all sources.
    pub async fn total_calls(&self) -> usize {
        let guard = self.state.lock().await;
        guard.calls.values().sum()
    }

    /// Clear all configured behaviors and call counters.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Sources without a configured behavior fail with `Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn DashboardConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn DashboardConnector>, controller)
    }

    /// Record the call and take a behavior snapshot without holding the lock across await points.
    async fn begin<T: Clone>(
        &self,
        source: SourceKind,
        pick: impl FnOnce(&InternalState) -> Option<MockBehavior<T>>,
    ) -> Option<MockBehavior<T>> {
        let mut guard = self.state.lock().await;
        *guard.calls.entry(source).or_default() += 1;
        pick(&guard)
    }

    async fn run<T>(source: SourceKind, behavior: Option<MockBehavior<T>>) -> Result<T, DashboardError> {
        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            Some(MockBehavior::Delay(d, v)) => {
                tokio::time::sleep(d).await;
                Ok(v)
            }
            Some(MockBehavior::Panic(msg)) => panic!("{msg}"),
            None => Err(DashboardError::unsupported(source.as_str())),
        }
    }
}

impl DashboardConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        Some(self as &dyn SummaryProvider)
    }

    fn as_quarter_average_provider(&self) -> Option<&dyn QuarterAverageProvider> {
        Some(self as &dyn QuarterAverageProvider)
    }

    fn as_region_average_provider(&self) -> Option<&dyn RegionAverageProvider> {
        Some(self as &dyn RegionAverageProvider)
    }

    fn as_grade_average_provider(&self) -> Option<&dyn GradeAverageProvider> {
        Some(self as &dyn GradeAverageProvider)
    }

    fn as_upcoming_events_provider(&self) -> Option<&dyn UpcomingEventsProvider> {
        Some(self as &dyn UpcomingEventsProvider)
    }
}

#[async_trait]
impl SummaryProvider for DynamicMockConnector {
    async fn summary(&self) -> Result<DashboardSummary, DashboardError> {
        let behavior = self
            .begin(SourceKind::Summary, |s| s.summary.clone())
            .await;
        Self::run(SourceKind::Summary, behavior).await
    }
}

#[async_trait]
impl QuarterAverageProvider for DynamicMockConnector {
    async fn average_by_quarter(&self) -> Result<SeriesMap, DashboardError> {
        let behavior = self
            .begin(SourceKind::AverageByQuarter, |s| s.average_by_quarter.clone())
            .await;
        Self::run(SourceKind::AverageByQuarter, behavior).await
    }
}

#[async_trait]
impl RegionAverageProvider for DynamicMockConnector {
    async fn average_by_region(&self) -> Result<SeriesMap, DashboardError> {
        let behavior = self
            .begin(SourceKind::AverageByRegion, |s| s.average_by_region.clone())
            .await;
        Self::run(SourceKind::AverageByRegion, behavior).await
    }
}

#[async_trait]
impl GradeAverageProvider for DynamicMockConnector {
    async fn average_by_grade(&self) -> Result<SeriesMap, DashboardError> {
        let behavior = self
            .begin(SourceKind::AverageByGrade, |s| s.average_by_grade.clone())
            .await;
        Self::run(SourceKind::AverageByGrade, behavior).await
    }
}

#[async_trait]
impl UpcomingEventsProvider for DynamicMockConnector {
    async fn upcoming_events(&self) -> Result<Vec<UpcomingEvent>, DashboardError> {
        let behavior = self
            .begin(SourceKind::UpcomingEvents, |s| s.upcoming_events.clone())
            .await;
        Self::run(SourceKind::UpcomingEvents, behavior).await
    }
}
