//! Gradeboard assembles one coherent dashboard from five independent analytics sources.
//!
//! Overview
//! - Fans out to the summary, the three chart series (by quarter, region and
//!   grade) and the upcoming-events source concurrently, each under its own
//!   timeout (15 s / 10 s / 8 s by default).
//! - Folds every per-source failure (timeout, transport, parse, unsupported)
//!   into "absent" so one bad backend never blocks the others.
//! - Classifies the cycle as live or demo and backfills absent fields from a
//!   deterministic synthetic provider, so the UI always has something to render.
//! - Publishes each result as a single atomic snapshot through a
//!   `tokio::sync::watch` channel.
//!
//! Key behaviors and trade-offs
//! - `load()` is throttled by a cooldown (10 s by default) once a summary is on
//!   screen; it exists to absorb refresh storms from several UI surfaces.
//! - `refresh()` ignores the cooldown but never runs two cycles at once; a
//!   request arriving mid-cycle is dropped, not queued.
//! - No retries and no backoff within a cycle: the next `load()`/`refresh()` is
//!   the retry. A timed-out call is not aborted; its late result is discarded.
//! - The synthetic flag follows the summary only. Live summary plus backfilled
//!   charts is still reported as live.
//!
//! Examples
//! Building an engine over the two HTTP backends:
//! ```rust,ignore
//! use std::sync::Arc;
//! use gradeboard::Dashboard;
//! use gradeboard_http::{OlapConnector, TransactionalConnector};
//!
//! let tx = TransactionalConnector::builder().base_url("https://api.school.example")?.build()?;
//! let olap = OlapConnector::builder().base_url("https://olap.school.example")?.build()?;
//!
//! let dashboard = Dashboard::builder()
//!     .with_connector(Arc::new(tx))
//!     .with_connector(Arc::new(olap))
//!     .cooldown(std::time::Duration::from_secs(10))
//!     .build()?;
//! ```
//!
//! Driving it from a UI layer:
//! ```rust,ignore
//! let mut rx = dashboard.subscribe();
//! dashboard.spawn_load();
//! while rx.changed().await.is_ok() {
//!     let state = rx.borrow_and_update().clone();
//!     render(&state);
//! }
//! ```
//!
//! See `gradeboard/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod cycle;
mod state;

pub use core::{Dashboard, DashboardBuilder};
pub use cycle::util::source_call_with_timeout;

// Re-export core types for convenience
pub use gradeboard_core::{
    ConnectorKey, CycleMode, CycleReport, DashboardConfig, DashboardConnector, DashboardError,
    DashboardSummary, DashboardViewState, LoadOutcome, SeriesMap, SourceKind, SourceSet,
    UpcomingEvent, synthetic,
};
