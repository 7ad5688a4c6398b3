//! Data layer: record types, CSV ingestion, filtering, and the scene store.

pub mod filter;
pub mod loader;
pub mod point;
pub mod store;
