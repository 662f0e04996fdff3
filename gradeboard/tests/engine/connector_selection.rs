use std::sync::Arc;

use gradeboard::{Dashboard, SourceKind, SourceSet};
use gradeboard_mock::MockConnector;

use crate::helpers::{failing_mock, live_mock};

#[tokio::test]
async fn first_registered_capable_connector_wins() {
    let (primary, primary_ctl) = live_mock("primary").await;
    let (secondary, secondary_ctl) = live_mock("secondary").await;
    let d = Dashboard::builder()
        .with_connector(primary)
        .with_connector(secondary)
        .build()
        .expect("valid");

    let outcome = d.refresh().await;
    assert!(outcome.ran());
    assert_eq!(primary_ctl.total_calls().await, 5);
    assert_eq!(secondary_ctl.total_calls().await, 0);
}

#[tokio::test]
async fn no_fallback_to_lower_priority_within_a_cycle() {
    let (primary, _primary_ctl) = failing_mock("primary").await;
    let (secondary, secondary_ctl) = live_mock("secondary").await;
    let d = Dashboard::builder()
        .with_connector(primary)
        .with_connector(secondary)
        .build()
        .expect("valid");

    let report = d.refresh().await.report().cloned().expect("ran");
    assert!(report.is_demo());
    assert_eq!(secondary_ctl.total_calls().await, 0);
}

#[tokio::test]
async fn sources_are_split_across_capable_connectors() {
    let series_only = Arc::new(MockConnector::only(SourceSet::SERIES));
    let (full, full_ctl) = live_mock("full").await;
    let d = Dashboard::builder()
        .with_connector(series_only)
        .with_connector(full)
        .build()
        .expect("valid");

    let report = d.refresh().await.report().cloned().expect("ran");
    assert!(report.absent.is_empty());
    assert_eq!(full_ctl.calls(SourceKind::Summary).await, 1);
    assert_eq!(full_ctl.calls(SourceKind::UpcomingEvents).await, 1);
    assert_eq!(full_ctl.calls(SourceKind::AverageByQuarter).await, 0);
    assert_eq!(full_ctl.calls(SourceKind::AverageByRegion).await, 0);
    assert_eq!(full_ctl.calls(SourceKind::AverageByGrade).await, 0);

    let s = d.current_state();
    assert_eq!(s.summary, Some(MockConnector::fixture_summary()));
    assert_eq!(s.average_by_region, MockConnector::fixture_average_by_region());
}

#[tokio::test]
async fn uncovered_source_is_backfilled() {
    let d = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::only(
            SourceSet::SUMMARY | SourceSet::SERIES,
        )))
        .build()
        .expect("valid");

    let report = d.refresh().await.report().cloned().expect("ran");
    assert!(!report.is_demo());
    assert_eq!(report.absent, SourceSet::UPCOMING_EVENTS);
    assert_eq!(
        d.current_state().upcoming_events,
        gradeboard::synthetic::upcoming_events()
    );
}
