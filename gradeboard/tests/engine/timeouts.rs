use std::time::Duration;

use gradeboard::{DashboardError, SourceKind, SourceSet, synthetic};
use gradeboard_mock::{MockBehavior, MockConnector};

use crate::helpers::{SUMMARY_TIMEOUT, dashboard, live_mock};

#[tokio::test(start_paused = true)]
async fn hanging_sources_are_bounded_by_the_slowest_timeout() {
    let (mock, controller) = live_mock("P0").await;
    controller.set_summary_behavior(MockBehavior::Hang).await;
    controller.set_series_behavior(MockBehavior::Hang).await;
    controller
        .set_upcoming_events_behavior(MockBehavior::Hang)
        .await;
    let d = dashboard(mock);

    let report = d.refresh().await.report().cloned().expect("ran");
    assert!(report.is_demo());
    assert!(report.elapsed >= SUMMARY_TIMEOUT);
    assert!(report.elapsed < SUMMARY_TIMEOUT + Duration::from_secs(1));
    assert!(report.warnings.iter().all(DashboardError::is_timeout));
    assert_eq!(*d.current_state(), synthetic::view_state());
}

#[tokio::test(start_paused = true)]
async fn live_summary_with_timed_out_series_and_no_events() {
    let (mock, controller) = live_mock("P0").await;
    controller.set_series_behavior(MockBehavior::Hang).await;
    controller
        .set_upcoming_events_behavior(MockBehavior::Return(Vec::new()))
        .await;
    let d = dashboard(mock);

    let report = d.refresh().await.report().cloned().expect("ran");
    assert!(!report.is_demo());
    assert_eq!(report.absent, SourceSet::SERIES | SourceSet::UPCOMING_EVENTS);
    assert_eq!(report.warnings.len(), 3);
    assert!(report.elapsed >= Duration::from_secs(10));
    assert!(report.elapsed < SUMMARY_TIMEOUT);

    let s = d.current_state();
    assert_eq!(s.summary, Some(MockConnector::fixture_summary()));
    assert!(!s.is_using_synthetic_data);
    assert_eq!(s.average_by_quarter, synthetic::average_by_quarter());
    assert_eq!(s.average_by_region, synthetic::average_by_region());
    assert_eq!(s.average_by_grade, synthetic::average_by_grade());
    assert_eq!(s.upcoming_events, synthetic::upcoming_events());
}

#[tokio::test(start_paused = true)]
async fn per_source_timeouts_are_independent() {
    let (mock, controller) = live_mock("P0").await;
    // 9 s beats the 10 s series timeout but misses the 8 s events timeout.
    controller
        .set_series_behavior(MockBehavior::Delay(
            Duration::from_secs(9),
            MockConnector::fixture_average_by_quarter(),
        ))
        .await;
    controller
        .set_upcoming_events_behavior(MockBehavior::Delay(
            Duration::from_secs(9),
            MockConnector::fixture_upcoming_events(),
        ))
        .await;
    let d = dashboard(mock);

    let report = d.refresh().await.report().cloned().expect("ran");
    assert_eq!(report.absent, SourceSet::UPCOMING_EVENTS);
    assert_eq!(
        report.warnings,
        vec![DashboardError::source_timeout("P0", SourceKind::UpcomingEvents.as_str())]
    );
}

#[tokio::test(start_paused = true)]
async fn late_result_is_discarded() {
    let (mock, controller) = live_mock("P0").await;
    let late = gradeboard::DashboardSummary {
        total_students: 1,
        ..MockConnector::fixture_summary()
    };
    controller
        .set_summary_behavior(MockBehavior::Delay(Duration::from_secs(20), late))
        .await;
    let d = dashboard(mock);

    assert!(d.refresh().await.ran());
    assert!(d.current_state().is_using_synthetic_data);

    tokio::time::sleep(Duration::from_secs(10)).await;
    let s = d.current_state();
    assert_eq!(s.summary, Some(synthetic::summary()));
    assert!(s.is_using_synthetic_data);
}

#[tokio::test(start_paused = true)]
async fn configured_timeouts_apply() {
    let (mock, controller) = live_mock("P0").await;
    controller.set_summary_behavior(MockBehavior::Hang).await;
    let d = gradeboard::Dashboard::builder()
        .with_connector(mock)
        .summary_timeout(Duration::from_secs(2))
        .build()
        .expect("valid");

    let report = d.refresh().await.report().cloned().expect("ran");
    assert_eq!(report.absent, SourceSet::SUMMARY);
    assert!(report.elapsed >= Duration::from_secs(2));
    assert!(report.elapsed < Duration::from_secs(3));
}
