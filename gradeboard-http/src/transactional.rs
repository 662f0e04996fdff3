use async_trait::async_trait;
use gradeboard_core::connector::{DashboardConnector, SummaryProvider, UpcomingEventsProvider};
use gradeboard_core::{ConnectorKey, DashboardError, DashboardSummary, UpcomingEvent};

use crate::builder::TransactionalConnectorBuilder;
use crate::source::HttpSource;

/// Connector for the transactional document-store API.
///
/// Serves `summary` (`GET dashboard/summary`) and `upcoming-events`
/// (`GET events/upcoming`).
#[derive(Clone, Debug)]
pub struct TransactionalConnector {
    http: HttpSource,
}

impl TransactionalConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("gradeboard-transactional");

    /// Start building a connector.
    #[must_use]
    pub fn builder() -> TransactionalConnectorBuilder {
        TransactionalConnectorBuilder::default()
    }

    /// The underlying HTTP handle.
    #[must_use]
    pub const fn source(&self) -> &HttpSource {
        &self.http
    }
}

impl From<HttpSource> for TransactionalConnector {
    fn from(http: HttpSource) -> Self {
        Self { http }
    }
}

impl DashboardConnector for TransactionalConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Transactional API"
    }

    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        Some(self as &dyn SummaryProvider)
    }

    fn as_upcoming_events_provider(&self) -> Option<&dyn UpcomingEventsProvider> {
        Some(self as &dyn UpcomingEventsProvider)
    }
}

#[async_trait]
impl SummaryProvider for TransactionalConnector {
    async fn summary(&self) -> Result<DashboardSummary, DashboardError> {
        self.http
            .get_json(self.name(), "dashboard/summary", "dashboard summary")
            .await
    }
}

#[async_trait]
impl UpcomingEventsProvider for TransactionalConnector {
    async fn upcoming_events(&self) -> Result<Vec<UpcomingEvent>, DashboardError> {
        self.http
            .get_json(self.name(), "events/upcoming", "upcoming events")
            .await
    }
}
