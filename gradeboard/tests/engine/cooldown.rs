use std::time::Duration;

use gradeboard::{LoadOutcome, SourceKind};

use crate::helpers::{dashboard, live_mock};

#[tokio::test(start_paused = true)]
async fn two_loads_within_cooldown_hit_the_network_once() {
    let (mock, controller) = live_mock("P0").await;
    let d = dashboard(mock);

    assert!(d.load().await.ran());
    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(d.load().await, LoadOutcome::Throttled);

    assert_eq!(controller.calls(SourceKind::Summary).await, 1);
    assert_eq!(controller.total_calls().await, 5);
}

#[tokio::test(start_paused = true)]
async fn load_runs_again_after_cooldown() {
    let (mock, controller) = live_mock("P0").await;
    let d = dashboard(mock);

    assert!(d.load().await.ran());
    tokio::time::advance(Duration::from_secs(9)).await;
    assert_eq!(d.load().await, LoadOutcome::Throttled);
    tokio::time::advance(Duration::from_secs(2)).await;

    let outcome = d.load().await;
    assert_eq!(outcome.report().map(|r| r.cycle), Some(2));
    assert_eq!(controller.calls(SourceKind::Summary).await, 2);
}

#[tokio::test(start_paused = true)]
async fn refresh_ignores_cooldown() {
    let (mock, controller) = live_mock("P0").await;
    let d = dashboard(mock);

    assert!(d.load().await.ran());
    assert!(d.refresh().await.ran());
    assert!(d.refresh().await.ran());
    assert_eq!(controller.calls(SourceKind::Summary).await, 3);
}

#[tokio::test(start_paused = true)]
async fn cooldown_counts_from_completion() {
    let (mock, controller) = live_mock("P0").await;
    let d = dashboard(mock);
    controller
        .set_summary_behavior(gradeboard_mock::MockBehavior::Delay(
            Duration::from_secs(6),
            gradeboard_mock::MockConnector::fixture_summary(),
        ))
        .await;

    // Cycle starts at t=0 and completes at t=6.
    assert!(d.load().await.ran());
    tokio::time::advance(Duration::from_secs(5)).await;
    // t=11: eleven seconds after start, five after completion.
    assert_eq!(d.load().await, LoadOutcome::Throttled);
}

#[tokio::test(start_paused = true)]
async fn custom_cooldown_is_honored() {
    let (mock, _controller) = live_mock("P0").await;
    let d = gradeboard::Dashboard::builder()
        .with_connector(mock)
        .cooldown(Duration::from_secs(1))
        .build()
        .expect("valid");

    assert!(d.load().await.ran());
    tokio::time::advance(Duration::from_millis(1500)).await;
    assert!(d.load().await.ran());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_loads_run_one_round_within_cooldown() {
    let (mock, controller) = live_mock("P0").await;
    let d = dashboard(mock);

    let handles: Vec<_> = (0..16).map(|_| d.spawn_load()).collect();
    let mut completed = 0;
    for h in handles {
        match h.await.expect("join") {
            LoadOutcome::Completed(_) => completed += 1,
            LoadOutcome::Throttled | LoadOutcome::AlreadyRunning => {}
        }
    }

    // Whoever acquires the guard after the first cycle sees the fresh summary
    // and the armed cooldown, so no second round can start.
    assert_eq!(completed, 1);
    assert_eq!(controller.calls(SourceKind::Summary).await, 1);
    assert_eq!(d.load().await, LoadOutcome::Throttled);
}
