//! Pure domain logic for the Wayfarer trip planner.
//!
//! Everything in this crate is deterministic and I/O-free: the wizard
//! state machine, stage payload validation, cost estimation, trip
//! aggregation, and the storage/export transforms. Network clients live
//! in `wayfarer-enrich`; persistence lives in `wayfarer-db`.

pub mod cost;
pub mod error;
pub mod export;
pub mod geo;
pub mod place;
pub mod trip;
pub mod types;
pub mod weather;
pub mod wizard;
