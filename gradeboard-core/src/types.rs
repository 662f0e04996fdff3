//! Re-export of foundational types from `gradeboard-types`.
// Consolidated re-exports so downstream crates can depend on `gradeboard-core` only

pub use gradeboard_types::{
    ConnectorKey, CycleMode, CycleReport, DashboardConfig, DashboardError, DashboardSummary,
    DashboardViewState, LoadOutcome, SeriesMap, SourceKind, SourceSet, UpcomingEvent,
};

pub use chrono::{DateTime, Utc};
pub use rust_decimal::Decimal;
