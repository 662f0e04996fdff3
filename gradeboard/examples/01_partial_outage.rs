use std::time::Duration;

use gradeboard::{Dashboard, DashboardError};
use gradeboard_mock::{DynamicMockConnector, MockBehavior, MockConnector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (mock, controller) = DynamicMockConnector::new_with_controller("campus");

    // Summary is healthy, the cube is down, events are slow but within budget.
    controller
        .set_summary_behavior(MockBehavior::Return(MockConnector::fixture_summary()))
        .await;
    controller
        .set_series_behavior(MockBehavior::Fail(DashboardError::connector(
            "campus",
            "cube unavailable",
        )))
        .await;
    controller
        .set_upcoming_events_behavior(MockBehavior::Delay(
            Duration::from_millis(200),
            MockConnector::fixture_upcoming_events(),
        ))
        .await;

    let dashboard = Dashboard::builder()
        .with_connector(mock)
        .events_timeout(Duration::from_secs(1))
        .build()?;

    let mut rx = dashboard.subscribe();
    let handle = dashboard.spawn_load();

    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        if state.is_loading {
            println!("loading...");
            continue;
        }
        println!(
            "published: synthetic={} regions={:?}",
            state.is_using_synthetic_data,
            state.average_by_region.labels().collect::<Vec<_>>()
        );
        break;
    }

    if let Some(report) = handle.await?.report() {
        println!(
            "cycle {} mode={:?} absent={:?} in {:?}",
            report.cycle, report.mode, report.absent, report.elapsed
        );
        for w in &report.warnings {
            println!("  warning: {w}");
        }
    }
    Ok(())
}
