use std::sync::Arc;
use std::time::Duration;

use gradeboard::{Dashboard, DashboardConfig, DashboardError};
use gradeboard_mock::MockConnector;

#[test]
fn build_requires_a_connector() {
    let err = Dashboard::builder().build().err().expect("must fail");
    assert!(matches!(err, DashboardError::InvalidArg(_)), "{err:?}");
}

#[test]
fn build_rejects_zero_timeout() {
    let err = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .series_timeout(Duration::ZERO)
        .build()
        .err()
        .expect("must fail");
    match err {
        DashboardError::InvalidArg(msg) => assert!(msg.contains("average-by-quarter"), "{msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn builder_modifiers_land_in_config() {
    let d = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .cooldown(Duration::from_secs(30))
        .summary_timeout(Duration::from_secs(5))
        .series_timeout(Duration::from_secs(4))
        .events_timeout(Duration::from_secs(3))
        .build()
        .expect("valid");
    let cfg = d.config();
    assert_eq!(cfg.cooldown, Duration::from_secs(30));
    assert_eq!(cfg.summary_timeout, Duration::from_secs(5));
    assert_eq!(cfg.series_timeout, Duration::from_secs(4));
    assert_eq!(cfg.events_timeout, Duration::from_secs(3));
}

#[test]
fn defaults_match_documented_values() {
    let d = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .expect("valid");
    assert_eq!(*d.config(), DashboardConfig::default());
    assert_eq!(d.config().cooldown, Duration::from_secs(10));
}

#[test]
fn initial_state_is_empty_and_loading() {
    let d = Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .expect("valid");
    let s = d.current_state();
    assert!(s.is_loading);
    assert!(s.summary.is_none());
    assert!(s.average_by_quarter.is_empty());
    assert!(s.upcoming_events.is_empty());
    assert!(!d.is_refreshing());
}
