use gradeboard::{CycleMode, SourceKind, SourceSet, synthetic};
use gradeboard_mock::{MockBehavior, MockConnector};

use crate::helpers::{dashboard, failing_mock, live_mock};

#[tokio::test]
async fn all_sources_failing_publishes_demo_data() {
    let (mock, _controller) = failing_mock("P0").await;
    let d = dashboard(mock);

    let report = d.refresh().await.report().cloned().expect("ran");
    assert_eq!(report.mode, CycleMode::Demo);
    assert!(report.absent.is_all());
    assert_eq!(report.warnings.len(), 5);
    assert!(report.fault.is_none());

    let s = d.current_state();
    assert_eq!(*s, synthetic::view_state());
    assert!(s.is_using_synthetic_data);
    assert!(!s.is_loading);
    assert!(s.error.is_none());
}

#[tokio::test]
async fn empty_payloads_count_as_absent() {
    let (mock, controller) = live_mock("P0").await;
    controller
        .set_summary_behavior(MockBehavior::Fail(gradeboard::DashboardError::not_found(
            "dashboard summary",
        )))
        .await;
    controller
        .set_series_behavior(MockBehavior::Return(gradeboard::SeriesMap::new()))
        .await;
    controller
        .set_upcoming_events_behavior(MockBehavior::Return(Vec::new()))
        .await;
    let d = dashboard(mock);

    let report = d.refresh().await.report().cloned().expect("ran");
    assert!(report.is_demo());
    // Empty results are not errors.
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(*d.current_state(), synthetic::view_state());
}

#[tokio::test]
async fn only_summary_failing_keeps_live_charts() {
    let (mock, controller) = live_mock("P0").await;
    controller
        .set_summary_behavior(MockBehavior::Fail(gradeboard::DashboardError::connector(
            "P0", "500",
        )))
        .await;
    let d = dashboard(mock);

    let report = d.refresh().await.report().cloned().expect("ran");
    assert_eq!(report.mode, CycleMode::Live);
    assert_eq!(report.absent, SourceSet::SUMMARY);

    let s = d.current_state();
    assert!(s.is_using_synthetic_data);
    assert_eq!(s.summary, Some(synthetic::summary()));
    assert_eq!(s.average_by_quarter, MockConnector::fixture_average_by_quarter());
    assert_eq!(s.average_by_region, MockConnector::fixture_average_by_region());
    assert_eq!(s.average_by_grade, MockConnector::fixture_average_by_grade());
    assert_eq!(s.upcoming_events, MockConnector::fixture_upcoming_events());
}

#[tokio::test]
async fn live_summary_with_backfilled_charts_is_live() {
    let (mock, controller) = live_mock("P0").await;
    controller
        .set_average_by_grade_behavior(MockBehavior::Fail(gradeboard::DashboardError::Data(
            "malformed".into(),
        )))
        .await;
    let d = dashboard(mock);

    let report = d.refresh().await.report().cloned().expect("ran");
    assert!(report.is_absent(SourceKind::AverageByGrade));
    assert_eq!(report.absent.kinds().count(), 1);

    let s = d.current_state();
    assert!(!s.is_using_synthetic_data);
    assert_eq!(s.summary, Some(MockConnector::fixture_summary()));
    assert_eq!(s.average_by_grade, synthetic::average_by_grade());
    assert!(s.is_complete());
}

#[tokio::test]
async fn panicking_source_is_isolated() {
    let (mock, controller) = live_mock("P0").await;
    controller
        .set_average_by_region_behavior(MockBehavior::Panic("region adapter bug"))
        .await;
    let d = dashboard(mock);

    let report = d.refresh().await.report().cloned().expect("ran");
    assert!(report.fault.is_none());
    assert_eq!(report.absent, SourceSet::AVERAGE_BY_REGION);
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.to_string().contains("region adapter bug"))
    );
    assert_eq!(
        d.current_state().average_by_region,
        synthetic::average_by_region()
    );
}

#[tokio::test]
async fn recovery_after_demo_cycle() {
    let (mock, controller) = failing_mock("P0").await;
    let d = dashboard(mock);
    assert!(d.refresh().await.report().expect("ran").is_demo());

    controller
        .set_summary_behavior(MockBehavior::Return(MockConnector::fixture_summary()))
        .await;
    let report = d.refresh().await.report().cloned().expect("ran");
    assert_eq!(report.mode, CycleMode::Live);
    assert!(!d.current_state().is_using_synthetic_data);
}
