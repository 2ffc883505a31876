//! Application layer: building the engine and the read-only operations
//! callers run against it.

pub mod engine;
pub mod ingestion;
pub mod integrity;
pub mod navigation;
pub mod resolution;
pub mod source;
pub mod statistics;
pub mod store;
