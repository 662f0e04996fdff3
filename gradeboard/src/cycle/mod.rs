use std::sync::Arc;

use gradeboard_core::{
    CycleReport, DashboardConfig, DashboardConnector, DashboardError, DashboardSummary, Fetched,
    Merged, SeriesMap, SourceKind, SourceSet, UpcomingEvent, merge,
};
use tokio::time::Instant;

use crate::core::Dashboard;

mod macros;
pub(crate) mod util;

use macros::source_fetcher;
use util::describe_join_error;

source_fetcher! {
    fn fetch_summary -> DashboardSummary,
    source: SourceKind::Summary,
    accessor: as_summary_provider,
    call: summary
}

source_fetcher! {
    fn fetch_average_by_quarter -> SeriesMap,
    source: SourceKind::AverageByQuarter,
    accessor: as_quarter_average_provider,
    call: average_by_quarter
}

source_fetcher! {
    fn fetch_average_by_region -> SeriesMap,
    source: SourceKind::AverageByRegion,
    accessor: as_region_average_provider,
    call: average_by_region
}

source_fetcher! {
    fn fetch_average_by_grade -> SeriesMap,
    source: SourceKind::AverageByGrade,
    accessor: as_grade_average_provider,
    call: average_by_grade
}

source_fetcher! {
    fn fetch_upcoming_events -> Vec<UpcomingEvent>,
    source: SourceKind::UpcomingEvents,
    accessor: as_upcoming_events_provider,
    call: upcoming_events
}

struct Collected {
    merged: Merged,
    absent: SourceSet,
    warnings: Vec<DashboardError>,
}

fn absent_on_err<T>(
    source: SourceKind,
    res: Result<T, DashboardError>,
    warnings: &mut Vec<DashboardError>,
) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "gradeboard::cycle", source = %source, error = %e, "source absent");
            #[cfg(not(feature = "tracing"))]
            let _ = source;
            warnings.push(e);
            None
        }
    }
}

/// Fan out to every source, wait for all of them, then merge.
async fn collect(connectors: &[Arc<dyn DashboardConnector>], cfg: &DashboardConfig) -> Collected {
    let (summary, quarter, region, grade, events) = tokio::join!(
        fetch_summary(connectors, cfg),
        fetch_average_by_quarter(connectors, cfg),
        fetch_average_by_region(connectors, cfg),
        fetch_average_by_grade(connectors, cfg),
        fetch_upcoming_events(connectors, cfg),
    );

    let mut warnings = Vec::new();
    let fetched = Fetched {
        summary: absent_on_err(SourceKind::Summary, summary, &mut warnings),
        average_by_quarter: absent_on_err(SourceKind::AverageByQuarter, quarter, &mut warnings)
            .unwrap_or_default(),
        average_by_region: absent_on_err(SourceKind::AverageByRegion, region, &mut warnings)
            .unwrap_or_default(),
        average_by_grade: absent_on_err(SourceKind::AverageByGrade, grade, &mut warnings)
            .unwrap_or_default(),
        upcoming_events: absent_on_err(SourceKind::UpcomingEvents, events, &mut warnings)
            .unwrap_or_default(),
    };
    let absent = fetched.absent();
    Collected {
        merged: merge(fetched),
        absent,
        warnings,
    }
}

impl Dashboard {
    /// Run one full cycle and publish its result. The caller holds the in-flight guard.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gradeboard::cycle", skip(self))
    )]
    pub(crate) async fn run_cycle(&self) -> CycleReport {
        let publisher = &self.inner.publisher;
        let cycle = publisher.next_cycle();
        let started = Instant::now();
        publisher.mark_loading();

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move { collect(&inner.connectors, &inner.cfg).await });
        let (merged, absent, warnings, fault) = match task.await {
            Ok(c) => (c.merged, c.absent, c.warnings, None),
            Err(join) => {
                let fault = DashboardError::engine_fault(describe_join_error(join));
                #[cfg(feature = "tracing")]
                tracing::error!(target: "gradeboard::cycle", cycle, error = %fault, "cycle faulted; publishing demo data");
                (
                    Merged::demo(Some(fault.to_string())),
                    SourceSet::all(),
                    Vec::new(),
                    Some(fault),
                )
            }
        };

        let report = CycleReport {
            cycle,
            mode: merged.mode,
            absent,
            warnings,
            elapsed: started.elapsed(),
            fault,
        };
        #[cfg(feature = "tracing")]
        tracing::info!(
            target: "gradeboard::cycle",
            cycle,
            mode = ?report.mode,
            absent = ?report.absent,
            elapsed_ms = u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
            "cycle complete"
        );
        publisher.complete(merged.state, report.clone());
        report
    }
}
