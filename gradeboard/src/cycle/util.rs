use std::time::Duration;

use gradeboard_core::{DashboardError, SourceKind};
use tokio::task::JoinError;

/// Tag a connector error with the connector name unless it already carries one.
pub(crate) fn tag_err(connector: &str, e: DashboardError) -> DashboardError {
    match e {
        e @ (DashboardError::NotFound { .. }
        | DashboardError::SourceTimeout { .. }
        | DashboardError::Connector { .. }
        | DashboardError::Unsupported { .. }
        | DashboardError::EngineFault(_)) => e,
        other => DashboardError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Human-readable reason a task did not produce a value.
pub(crate) fn describe_join_error(e: JoinError) -> String {
    if e.is_panic() {
        let payload = e.into_panic();
        payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic with non-string payload".to_string())
    } else {
        "task cancelled".to_string()
    }
}

/// Run one source call on its own task, bounded by `timeout`.
///
/// - The call runs on a separate Tokio task, so a panic inside the adapter is
///   reported as a `Connector` error for this source only.
/// - On timeout the task is detached, not aborted: the call may still finish,
///   and its result is dropped.
/// - Errors that do not already name a connector are tagged with `connector`.
///
/// # Errors
/// `SourceTimeout` when the deadline passes, otherwise whatever the call
/// returned (tagged), or a `Connector` error if the call panicked.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "gradeboard::cycle::source_call_with_timeout",
        skip(fut),
        fields(
            connector = connector,
            source = %source,
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        ),
    )
)]
pub async fn source_call_with_timeout<T, Fut>(
    connector: &'static str,
    source: SourceKind,
    timeout: Duration,
    fut: Fut,
) -> Result<T, DashboardError>
where
    T: Send + 'static,
    Fut: core::future::Future<Output = Result<T, DashboardError>> + Send + 'static,
{
    let handle = tokio::spawn(fut);
    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(res)) => res.map_err(|e| tag_err(connector, e)),
        Ok(Err(join)) => Err(DashboardError::connector(
            connector,
            format!("{source} call failed: {}", describe_join_error(join)),
        )),
        Err(_) => Err(DashboardError::source_timeout(connector, source.as_str())),
    }
}
