//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - Storage (DuckDB on disk, in-memory for development and tests)
//! - HTTP transport (axum router, controllers, error mapping)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
