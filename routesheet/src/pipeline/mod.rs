//! Route resolution pipeline.
//!
//! Turns a free-text destination and the user's position into a [`Route`]:
//!
//! ```text
//! RouteRequest ──► Geocoder ──► Coordinate ──► DirectionsProvider ──► Route
//!                    │                               │
//!                    └── AddressNotFound /           └── NoRouteFound /
//!                        GeocodingFailed                 DirectionsFailed
//! ```
//!
//! [`RoutePipeline`] runs one attempt; [`ResolutionSlot`] owns the single
//! in-flight attempt of a screen, superseding older ones and dropping
//! results that arrive after the screen is gone.

mod error;
mod resolver;
mod slot;
mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use error::ResolutionError;
pub use resolver::RoutePipeline;
pub use slot::{Generation, ResolutionSlot};
pub use types::{Route, RouteRequest};
