//! HTTP handlers, grouped by resource.

pub mod auth;
pub mod enrichment;
pub mod export;
pub mod geocode;
pub mod trips;
pub mod wizard;
