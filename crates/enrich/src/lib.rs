//! Enrichment clients: the external lookups that augment wizard state.
//!
//! Four request/response clients over `reqwest`: geocoding suggestions,
//! nearby-place search, weather forecast, and generative text. Each
//! returns a typed `Result`; callers are expected to recover from
//! [`EnrichError`] locally (empty list, `None`, or a fallback string)
//! rather than surfacing it to the end user.
//!
//! The pure shaping/filtering helpers next to each client are where the
//! behavioral contracts live, and they are unit-tested without a network.

pub mod error;
pub mod geocode;
pub mod places;
pub mod text;
pub mod weather;

pub use error::EnrichError;
