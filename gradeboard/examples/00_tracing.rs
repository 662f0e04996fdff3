use std::sync::Arc;

use gradeboard::Dashboard;
use gradeboard_mock::MockConnector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,gradeboard=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let dashboard = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    let outcome = dashboard.load().await;
    println!("first load: {outcome:?}");

    // Within the cooldown: throttled.
    let outcome = dashboard.load().await;
    println!("second load: {outcome:?}");

    let state = dashboard.current_state();
    println!("{}", describe(&state));
    Ok(())
}

fn describe(state: &gradeboard::DashboardViewState) -> String {
    format!(
        "students={:?} synthetic={} quarters={} events={}",
        state.summary.as_ref().map(|s| s.total_students),
        state.is_using_synthetic_data,
        state.average_by_quarter.len(),
        state.upcoming_events.len(),
    )
}
