use std::sync::Arc;

use gradeboard::{CycleMode, Dashboard, DashboardError, synthetic};

use crate::helpers::PanickingConnector;

#[tokio::test]
async fn fault_in_cycle_publishes_demo_with_error() {
    let d = Dashboard::builder()
        .with_connector(Arc::new(PanickingConnector))
        .build()
        .expect("valid");

    let report = d.refresh().await.report().cloned().expect("ran");
    assert_eq!(report.mode, CycleMode::Demo);
    assert!(report.absent.is_all());
    match &report.fault {
        Some(DashboardError::EngineFault(msg)) => {
            assert!(msg.contains("summary accessor blew up"), "{msg}");
        }
        other => panic!("unexpected fault: {other:?}"),
    }

    let s = d.current_state();
    assert!(!s.is_loading);
    assert!(s.is_using_synthetic_data);
    assert_eq!(s.summary, Some(synthetic::summary()));
    assert_eq!(s.upcoming_events, synthetic::upcoming_events());
    let err = s.error.as_deref().expect("diagnostic message");
    assert!(err.contains("summary accessor blew up"), "{err}");
}

#[tokio::test]
async fn engine_recovers_after_fault() {
    let d = Dashboard::builder()
        .with_connector(Arc::new(PanickingConnector))
        .build()
        .expect("valid");

    assert!(d.refresh().await.ran());
    assert!(!d.is_refreshing());
    // The guard was released; a second cycle runs (and faults) again.
    let report = d.refresh().await.report().cloned().expect("ran");
    assert_eq!(report.cycle, 2);
    assert!(report.fault.is_some());
}
