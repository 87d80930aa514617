//! Villa listing search: the compiled-in rental catalog, filter evaluation,
//! and reconciliation of map markers against a pluggable map surface.

pub mod config;
pub mod error;
pub mod listings;
pub mod map;
pub mod telemetry;
