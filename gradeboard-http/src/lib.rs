//! gradeboard-http
//!
//! Connectors that implement `DashboardConnector` over the two HTTP backends a
//! school dashboard usually sits on:
//! - [`TransactionalConnector`]: the document-store API serving the headline
//!   summary and the upcoming events list.
//! - [`OlapConnector`]: the analytics cube serving the three averages series.
//!
//! Neither connector applies its own deadline; the engine bounds every call.
#![warn(missing_docs)]

mod builder;
mod olap;
mod source;
mod transactional;

pub use builder::{HttpConnectorBuilder, OlapConnectorBuilder, TransactionalConnectorBuilder};
pub use olap::OlapConnector;
pub use source::HttpSource;
pub use transactional::TransactionalConnector;
