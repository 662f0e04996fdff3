use std::sync::Arc;

use gradeboard::Dashboard;
use gradeboard_http::{OlapConnector, TransactionalConnector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let tx_url =
        std::env::var("GRADEBOARD_TX_URL").unwrap_or_else(|_| "http://localhost:8080/api".into());
    let olap_url =
        std::env::var("GRADEBOARD_OLAP_URL").unwrap_or_else(|_| "http://localhost:8081".into());

    let http = reqwest_client();
    let mut tx = TransactionalConnector::builder()
        .base_url(&tx_url)?
        .client(http.clone());
    if let Ok(token) = std::env::var("GRADEBOARD_TOKEN") {
        tx = tx.bearer_token(token);
    }
    let olap = OlapConnector::builder()
        .base_url(&olap_url)?
        .client(http)
        .build()?;

    let dashboard = Dashboard::builder()
        .with_connector(Arc::new(tx.build()?))
        .with_connector(Arc::new(olap))
        .build()?;

    let outcome = dashboard.refresh().await;
    let state = dashboard.current_state();
    println!(
        "ran={} synthetic={} students={:?}",
        outcome.ran(),
        state.is_using_synthetic_data,
        state.summary.as_ref().map(|s| s.total_students)
    );
    if let Some(report) = outcome.report() {
        for w in &report.warnings {
            println!("  absent: {w}");
        }
    }
    Ok(())
}

fn reqwest_client() -> reqwest::Client {
    reqwest::Client::new()
}
