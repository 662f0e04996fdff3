use async_trait::async_trait;
use gradeboard_core::connector::{
    DashboardConnector, GradeAverageProvider, QuarterAverageProvider, RegionAverageProvider,
};
use gradeboard_core::{ConnectorKey, DashboardError, SeriesMap};
use serde::Deserialize;

use crate::builder::OlapConnectorBuilder;
use crate::source::HttpSource;

/// One row of an averages cube query.
#[derive(Debug, Deserialize)]
struct AverageRow {
    label: String,
    average: f64,
}

/// Later duplicates replace earlier ones; non-finite averages are dropped.
fn fold_rows(rows: Vec<AverageRow>) -> SeriesMap {
    let mut out = SeriesMap::new();
    for row in rows {
        if row.average.is_finite() {
            out.insert(row.label, row.average);
        }
    }
    out
}

/// Connector for the OLAP averages cube.
///
/// Serves the three series from `GET cube/average/{quarter,region,grade}`.
#[derive(Clone, Debug)]
pub struct OlapConnector {
    http: HttpSource,
}

impl OlapConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("gradeboard-olap");

    /// Start building a connector.
    #[must_use]
    pub fn builder() -> OlapConnectorBuilder {
        OlapConnectorBuilder::default()
    }

    /// The underlying HTTP handle.
    #[must_use]
    pub const fn source(&self) -> &HttpSource {
        &self.http
    }

    async fn averages(&self, dimension: &str) -> Result<SeriesMap, DashboardError> {
        let rows: Vec<AverageRow> = self
            .http
            .get_json(
                self.name(),
                &format!("cube/average/{dimension}"),
                &format!("averages by {dimension}"),
            )
            .await?;
        Ok(fold_rows(rows))
    }
}

impl From<HttpSource> for OlapConnector {
    fn from(http: HttpSource) -> Self {
        Self { http }
    }
}

impl DashboardConnector for OlapConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "OLAP cube"
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
}

#[async_trait]
impl QuarterAverageProvider for OlapConnector {
    async fn average_by_quarter(&self) -> Result<SeriesMap, DashboardError> {
        self.averages("quarter").await
    }
}

#[async_trait]
impl RegionAverageProvider for OlapConnector {
    async fn average_by_region(&self) -> Result<SeriesMap, DashboardError> {
        self.averages("region").await
    }
}

#[async_trait]
impl GradeAverageProvider for OlapConnector {
    async fn average_by_grade(&self) -> Result<SeriesMap, DashboardError> {
        self.averages("grade").await
    }
}
