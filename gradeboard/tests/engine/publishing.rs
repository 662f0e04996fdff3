use std::time::Duration;

use gradeboard::DashboardSummary;
use gradeboard_mock::{MockBehavior, MockConnector};

use crate::helpers::{dashboard, live_mock, settle};

fn other_summary() -> DashboardSummary {
    DashboardSummary {
        total_students: 9999,
        ..MockConnector::fixture_summary()
    }
}

#[tokio::test(start_paused = true)]
async fn loading_state_keeps_previous_data() {
    let (mock, controller) = live_mock("P0").await;
    let d = dashboard(mock);
    assert!(d.refresh().await.ran());
    let before = d.current_state();
    assert!(!before.is_loading);

    controller
        .set_summary_behavior(MockBehavior::Delay(Duration::from_secs(5), other_summary()))
        .await;
    let handle = d.spawn_refresh();
    settle().await;

    let during = d.current_state();
    assert!(during.is_loading);
    assert!(d.is_refreshing());
    assert_eq!(during.summary, before.summary);
    assert_eq!(during.average_by_region, before.average_by_region);

    assert!(handle.await.expect("join").ran());
    let after = d.current_state();
    assert!(!after.is_loading);
    assert_eq!(after.summary, Some(other_summary()));
}

#[tokio::test]
async fn subscribers_see_whole_snapshots() {
    let (mock, _controller) = live_mock("P0").await;
    let d = dashboard(mock);
    let mut rx = d.subscribe();

    assert!(d.refresh().await.ran());
    assert!(rx.has_changed().expect("sender alive"));
    let snap = rx.borrow_and_update().clone();
    assert!(!snap.is_loading);
    assert!(snap.is_complete());
    assert_eq!(snap.summary, Some(MockConnector::fixture_summary()));
}

#[tokio::test]
async fn last_report_tracks_latest_cycle() {
    let (mock, _controller) = live_mock("P0").await;
    let d = dashboard(mock);
    assert!(d.last_report().is_none());

    let first = d.refresh().await.report().cloned().expect("ran");
    assert_eq!(d.last_report(), Some(first));
    let second = d.refresh().await.report().cloned().expect("ran");
    assert_eq!(second.cycle, 2);
    assert_eq!(d.last_report(), Some(second));
}

#[tokio::test]
async fn every_published_state_is_complete() {
    let (mock, controller) = live_mock("P0").await;
    controller
        .set_series_behavior(MockBehavior::Fail(gradeboard::DashboardError::Other(
            "down".into(),
        )))
        .await;
    let d = dashboard(mock);
    let mut rx = d.subscribe();

    let watcher = tokio::spawn(async move {
        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let s = rx.borrow_and_update().clone();
            let done = !s.is_loading;
            seen.push(s);
            if done {
                break;
            }
        }
        seen
    });

    assert!(d.refresh().await.ran());
    let seen = watcher.await.expect("join");
    let last = seen.last().expect("at least one snapshot");
    assert!(!last.is_loading);
    assert!(last.is_complete());
}
