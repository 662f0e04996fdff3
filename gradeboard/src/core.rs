use std::sync::Arc;
use std::time::Duration;

use gradeboard_core::{
    CycleReport, DashboardConfig, DashboardConnector, DashboardError, DashboardViewState,
    LoadOutcome, SourceKind,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::state::{InFlight, Publisher};

/// Aggregation engine that owns the published dashboard state.
///
/// Cheap to clone; clones share connectors, configuration and state.
#[derive(Clone)]
pub struct Dashboard {
    pub(crate) inner: Arc<Inner>,
}

pub(crate) struct Inner {
    pub(crate) connectors: Vec<Arc<dyn DashboardConnector>>,
    pub(crate) cfg: DashboardConfig,
    pub(crate) publisher: Arc<Publisher>,
}

/// Builder for constructing a `Dashboard` with custom configuration.
pub struct DashboardBuilder {
    connectors: Vec<Arc<dyn DashboardConnector>>,
    cfg: DashboardConfig,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a new builder with the default timeouts and cooldown.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; register at least one via [`with_connector`].
    /// - Defaults: 10 s cooldown, 15 s summary timeout, 10 s per series, 8 s events.
    ///
    /// [`with_connector`]: DashboardBuilder::with_connector
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: DashboardConfig::default(),
        }
    }

    /// Register a connector.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is priority order: each source is served by the first
    ///   registered connector that advertises it.
    /// - There is no fallback to a lower-priority connector within a cycle; a
    ///   failing source is simply absent until the next cycle.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn DashboardConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: DashboardConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the minimum interval between accepted `load()` calls.
    ///
    /// Only applies while the published state holds a summary; `refresh()`
    /// ignores it entirely.
    #[must_use]
    pub const fn cooldown(mut self, cooldown: Duration) -> Self {
        self.cfg.cooldown = cooldown;
        self
    }

    /// Set the timeout for the summary source.
    #[must_use]
    pub const fn summary_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.summary_timeout = timeout;
        self
    }

    /// Set the timeout applied to each of the three series sources.
    #[must_use]
    pub const fn series_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.series_timeout = timeout;
        self
    }

    /// Set the timeout for the upcoming events source.
    #[must_use]
    pub const fn events_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.events_timeout = timeout;
        self
    }

    /// Build the `Dashboard` engine.
    ///
    /// Sources no registered connector advertises are allowed; they are always
    /// absent and backfilled with synthetic data.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered or any
    /// per-source timeout is zero.
    pub fn build(self) -> Result<Dashboard, DashboardError> {
        if self.connectors.is_empty() {
            return Err(DashboardError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if let Some(kind) = SourceKind::ALL
            .into_iter()
            .find(|k| self.cfg.timeout_for(*k).is_zero())
        {
            return Err(DashboardError::InvalidArg(format!(
                "timeout for {kind} must be greater than zero"
            )));
        }

        #[cfg(feature = "tracing")]
        for kind in SourceKind::ALL {
            if !self.connectors.iter().any(|c| c.supports(kind)) {
                tracing::warn!(
                    target: "gradeboard::core",
                    source = %kind,
                    "no registered connector serves this source; it will always be synthetic"
                );
            }
        }

        Ok(Dashboard {
            inner: Arc::new(Inner {
                connectors: self.connectors,
                cfg: self.cfg,
                publisher: Arc::new(Publisher::new()),
            }),
        })
    }
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use gradeboard_mock::MockConnector;
    ///
    /// let dashboard = gradeboard::Dashboard::builder()
    ///     .with_connector(Arc::new(MockConnector::new()))
    ///     .events_timeout(std::time::Duration::from_secs(5))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.cfg
    }

    /// The latest published snapshot.
    ///
    /// Before the first cycle completes this is the empty initial state with
    /// `is_loading = true`.
    #[must_use]
    pub fn current_state(&self) -> Arc<DashboardViewState> {
        self.inner.publisher.current()
    }

    /// Subscribe to published snapshots.
    ///
    /// Every update replaces the whole snapshot, so a receiver never observes a
    /// mix of two cycles.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<DashboardViewState>> {
        self.inner.publisher.subscribe()
    }

    /// Whether a cycle is currently in flight. Best effort; may be stale by the
    /// time the caller reads it.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.inner.publisher.is_in_flight()
    }

    /// Report of the most recently completed cycle.
    #[must_use]
    pub fn last_report(&self) -> Option<CycleReport> {
        self.inner.publisher.last_report()
    }

    /// Request a load, honoring the cooldown.
    ///
    /// Behavior and trade-offs:
    /// - Skipped with `Throttled` when the last cycle completed within the
    ///   cooldown window and the current state already holds a summary.
    /// - Otherwise behaves exactly like [`refresh`](Dashboard::refresh).
    /// - The cooldown is checked while holding the in-flight guard, so a load
    ///   racing a cycle that just completed is throttled rather than re-run.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gradeboard::core", skip(self))
    )]
    pub async fn load(&self) -> LoadOutcome {
        self.run_guarded(true).await
    }

    /// Force a new cycle regardless of the cooldown.
    ///
    /// Returns `AlreadyRunning` without doing anything if a cycle is in flight;
    /// the request is dropped, not queued.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gradeboard::core", skip(self))
    )]
    pub async fn refresh(&self) -> LoadOutcome {
        self.run_guarded(false).await
    }

    /// Fire-and-forget [`load`](Dashboard::load).
    ///
    /// Must be called within a Tokio runtime.
    pub fn spawn_load(&self) -> JoinHandle<LoadOutcome> {
        let this = self.clone();
        tokio::spawn(async move { this.load().await })
    }

    /// Fire-and-forget [`refresh`](Dashboard::refresh).
    ///
    /// Must be called within a Tokio runtime.
    pub fn spawn_refresh(&self) -> JoinHandle<LoadOutcome> {
        let this = self.clone();
        tokio::spawn(async move { this.refresh().await })
    }

    async fn run_guarded(&self, honor_cooldown: bool) -> LoadOutcome {
        let Some(mut guard) = InFlight::try_begin(&self.inner.publisher) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "gradeboard::core", "request dropped; a cycle is in flight");
            return LoadOutcome::AlreadyRunning;
        };
        if honor_cooldown && self.is_cooling_down() {
            // Nothing was published; release without touching the state.
            guard.finish();
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "gradeboard::core", "load throttled by cooldown");
            return LoadOutcome::Throttled;
        }
        let report = self.run_cycle().await;
        guard.finish();
        LoadOutcome::Completed(report)
    }

    fn is_cooling_down(&self) -> bool {
        self.current_state().has_summary()
            && self
                .inner
                .publisher
                .last_completed()
                .is_some_and(|at| at.elapsed() < self.inner.cfg.cooldown)
    }
}
