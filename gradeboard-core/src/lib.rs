//! gradeboard-core
//!
//! Core types, traits, and policies shared across the gradeboard workspace.
//!
//! - `types`: re-exports of the data model, configuration, and error type.
//! - `connector`: the `DashboardConnector` trait and one role trait per source.
//! - `synthetic`: deterministic placeholder data used when sources are absent.
//! - `merge`: the live-vs-demo classification and per-field fallback.
//!
//! Async runtime
//! -------------
//! Role traits are `async_trait` objects and carry no runtime dependency of
//! their own; the `gradeboard` engine drives them on Tokio.
#![warn(missing_docs)]

/// Connector role traits and the primary `DashboardConnector` interface.
pub mod connector;
/// Live-vs-demo classification and per-field fallback.
pub mod merge;
/// Deterministic placeholder data for every source.
pub mod synthetic;
pub mod types;

pub use connector::DashboardConnector;
pub use merge::{Fetched, Merged, merge};
pub use types::*;
