//! Gradeboard-specific data transfer objects and configuration primitives.
//!
//! Everything in here is plain data: the dashboard model rendered by the UI,
//! the labels of the five remote sources, the engine configuration, and the
//! per-cycle diagnostics report. Behavior lives in `gradeboard-core` and
//! `gradeboard`.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod model;
mod reports;
mod source;

pub use config::DashboardConfig;
pub use connector::ConnectorKey;
pub use error::DashboardError;
pub use model::{DashboardSummary, DashboardViewState, SeriesMap, UpcomingEvent};
pub use reports::{CycleMode, CycleReport, LoadOutcome};
pub use source::{SourceKind, SourceSet};
