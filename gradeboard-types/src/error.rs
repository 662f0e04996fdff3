use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the gradeboard workspace.
///
/// Connectors return it from every fetch; the engine folds per-source variants
/// into "absent" and keeps them only as report warnings. [`EngineFault`] is the
/// one variant that reaches the published view state.
///
/// [`EngineFault`]: DashboardError::EngineFault
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DashboardError {
    /// No registered connector serves the requested source.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// The source label (e.g. "average-by-region").
        capability: String,
    },

    /// Issues with the returned or expected data (malformed body, missing fields).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The backend had nothing for the requested resource.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "dashboard summary".
        what: String,
    },

    /// An individual source call exceeded its configured timeout.
    #[error("source timed out: {capability} via {connector}")]
    SourceTimeout {
        /// Connector name that timed out.
        connector: String,
        /// The source label.
        capability: String,
    },

    /// The aggregation cycle itself failed (not an individual source).
    #[error("engine fault: {0}")]
    EngineFault(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl DashboardError {
    /// Helper: build an `Unsupported` error for a source label.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::SourceTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build an `EngineFault` error.
    pub fn engine_fault(msg: impl Into<String>) -> Self {
        Self::EngineFault(msg.into())
    }

    /// Whether this error is a per-source timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::SourceTimeout { .. })
    }
}
